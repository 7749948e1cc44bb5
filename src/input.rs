/// Which camera gesture a canvas drag drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Last pointer position of an in-progress canvas drag.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: Option<DragMode>,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, x: f32, y: f32) {
        self.mode = Some(mode);
        self.last_x = x;
        self.last_y = y;
    }

    /// Pixel delta since the previous call; `None` when no drag is active.
    pub fn delta_to(&mut self, x: f32, y: f32) -> Option<(DragMode, f32, f32)> {
        let mode = self.mode?;
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.last_x = x;
        self.last_y = y;
        Some((mode, dx, dy))
    }

    pub fn end(&mut self) -> Option<DragMode> {
        self.mode.take()
    }
}

/// Primary button rotates, secondary pans (only when panning is enabled).
#[inline]
pub fn drag_mode_for_button(button: i16, enable_pan: bool) -> Option<DragMode> {
    match button {
        0 => Some(DragMode::Rotate),
        2 if enable_pan => Some(DragMode::Pan),
        _ => None,
    }
}
