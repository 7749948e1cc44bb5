//! Declarative animation sequencer.
//!
//! A [`Timeline`] is an ordered list of [`AnimationStep`]s. Each step starts
//! when the previous one has fully finished (plus its own `delay`), and may
//! fan out over several elements with a `stagger` between them. Sampling is
//! stateless with respect to the targets: every call reports the pose each
//! target should have at the current time, and the caller applies it.
//!
//! Like GSAP's `fromTo`, a step's `from` pose is reported as soon as the
//! timeline is first advanced, so elements are hidden before their turn.

use crate::error::SceneError;
use crate::tween::{Ease, Lerp};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    /// Uniform scale of the sphere mesh.
    SphereScale,
    /// Every element carrying this CSS class, in document order.
    Class(String),
}

impl AnimationTarget {
    pub fn class(name: &str) -> Self {
        AnimationTarget::Class(name.to_string())
    }
}

/// Animated properties. `None` leaves the property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub opacity: Option<f32>,
    /// CSS `translateY` in percent of the element's own height.
    pub y_percent: Option<f32>,
    pub scale: Option<f32>,
}

impl Pose {
    pub fn opacity(v: f32) -> Self {
        Self {
            opacity: Some(v),
            ..Self::default()
        }
    }

    pub fn scale(v: f32) -> Self {
        Self {
            scale: Some(v),
            ..Self::default()
        }
    }

    pub fn with_y_percent(mut self, v: f32) -> Self {
        self.y_percent = Some(v);
        self
    }

    fn interpolate(&self, to: &Pose, t: f32) -> Pose {
        fn mix(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a.lerp(b, t)),
                (None, b) => b,
                (a, None) => a,
            }
        }
        Pose {
            opacity: mix(self.opacity, to.opacity, t),
            y_percent: mix(self.y_percent, to.y_percent, t),
            scale: mix(self.scale, to.scale, t),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnimationStep {
    pub target: AnimationTarget,
    pub from: Pose,
    pub to: Pose,
    pub duration: f32,
    pub delay: f32,
    pub stagger: f32,
    pub ease: Ease,
    /// Number of elements the target resolved to.
    pub count: usize,
}

impl AnimationStep {
    pub fn new(target: AnimationTarget, from: Pose, to: Pose, duration: f32) -> Self {
        Self {
            target,
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
            count: 1,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Time from the first element starting to the last one finishing.
    pub fn span(&self) -> f32 {
        self.duration + self.stagger * self.count.saturating_sub(1) as f32
    }

    fn progress(&self, local: f32) -> f32 {
        if local < 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (local / self.duration).min(1.0)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sample<'a> {
    pub target: &'a AnimationTarget,
    pub index: usize,
    pub pose: Pose,
}

pub type Samples<'a> = SmallVec<[Sample<'a>; 8]>;

#[derive(Clone, Debug)]
struct Scheduled {
    step: AnimationStep,
    start: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<Scheduled>,
    end: f32,
    elapsed: f32,
    settled: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step after everything already queued.
    pub fn push(&mut self, step: AnimationStep) -> Result<(), SceneError> {
        if step.count == 0 {
            let name = match &step.target {
                AnimationTarget::SphereScale => "sphere scale".to_string(),
                AnimationTarget::Class(c) => format!(".{c}"),
            };
            return Err(SceneError::EmptyTimelineTarget(name));
        }
        let start = self.end + step.delay;
        self.end = start + step.span();
        self.entries.push(Scheduled { step, start });
        self.settled = false;
        Ok(())
    }

    pub fn duration(&self) -> f32 {
        self.end
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.end
    }

    /// Drop every queued step; later calls to `advance` report nothing.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.end = 0.0;
        self.elapsed = 0.0;
        self.settled = true;
    }

    /// Move the playhead forward and report the poses to apply.
    ///
    /// Once the final poses have been reported the timeline goes quiet.
    pub fn advance(&mut self, dt: f32) -> Samples<'_> {
        if self.settled {
            return Samples::new();
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.end);
        if self.is_complete() {
            self.settled = true;
        }
        self.sample_at(self.elapsed)
    }

    /// Poses for every target at absolute time `t`, without moving the playhead.
    pub fn sample_at(&self, t: f32) -> Samples<'_> {
        let mut out = Samples::new();
        for entry in &self.entries {
            let step = &entry.step;
            for index in 0..step.count {
                let local = t - (entry.start + step.stagger * index as f32);
                let p = step.ease.apply(step.progress(local));
                out.push(Sample {
                    target: &step.target,
                    index,
                    pose: step.from.interpolate(&step.to, p),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(class: &str) -> AnimationStep {
        AnimationStep::new(
            AnimationTarget::class(class),
            Pose::opacity(0.0),
            Pose::opacity(1.0),
            1.0,
        )
    }

    #[test]
    fn steps_are_scheduled_back_to_back() {
        let mut tl = Timeline::new();
        tl.push(fade("a")).unwrap();
        tl.push(fade("b").with_delay(0.25)).unwrap();
        assert!((tl.duration() - 2.25).abs() < 1e-6);
    }

    #[test]
    fn empty_target_is_rejected() {
        let mut tl = Timeline::new();
        let err = tl.push(fade("missing").with_count(0)).unwrap_err();
        assert_eq!(err, SceneError::EmptyTimelineTarget(".missing".into()));
        assert!(tl.is_empty());
    }

    #[test]
    fn first_advance_reports_from_pose() {
        let mut tl = Timeline::new();
        tl.push(fade("a")).unwrap();
        tl.push(fade("b")).unwrap();
        let samples = tl.advance(0.0);
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.pose.opacity == Some(0.0)));
    }

    #[test]
    fn goes_quiet_after_completion() {
        let mut tl = Timeline::new();
        tl.push(fade("a")).unwrap();
        let last = tl.advance(5.0)[0].pose.opacity;
        assert_eq!(last, Some(1.0));
        assert!(tl.advance(0.016).is_empty());
    }

    #[test]
    fn clear_stops_reporting() {
        let mut tl = Timeline::new();
        tl.push(fade("a")).unwrap();
        tl.clear();
        assert!(tl.is_empty());
        assert!(tl.advance(0.5).is_empty());
    }
}
