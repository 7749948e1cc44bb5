/// Host lifecycle: `Idle → Running → Stopped`, or straight `Idle → Stopped`.
///
/// `Stopped` is terminal. Transition methods return whether anything
/// changed so callers can skip the matching side effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl Lifecycle {
    pub fn start(&mut self) -> bool {
        match self {
            Lifecycle::Idle => {
                *self = Lifecycle::Running;
                true
            }
            Lifecycle::Running | Lifecycle::Stopped => false,
        }
    }

    pub fn stop(&mut self) -> bool {
        match self {
            Lifecycle::Stopped => false,
            Lifecycle::Idle | Lifecycle::Running => {
                *self = Lifecycle::Stopped;
                true
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Lifecycle::Running)
    }
}
