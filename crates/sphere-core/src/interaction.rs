//! Pointer drag → color mapping.
//!
//! The controller is a two-state machine (`pressed` / not pressed). Moves are
//! ignored unless pressed; while pressed every move produces a fresh
//! [`DerivedRgb`] which the scene eases toward.

use crate::color::{derive_rgb, DerivedRgb};
use crate::viewport::Viewport;

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    pressed: bool,
    last: Option<DerivedRgb>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Most recent color derived by a pressed move, if any.
    pub fn last_color(&self) -> Option<DerivedRgb> {
        self.last
    }

    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        viewport: &Viewport,
    ) -> Option<DerivedRgb> {
        if !self.pressed {
            return None;
        }
        let rgb = derive_rgb(pointer_x, pointer_y, viewport);
        self.last = Some(rgb);
        Some(rgb)
    }
}
