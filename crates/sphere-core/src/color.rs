//! Color types used by the material and the pointer mapping.
//!
//! `Color` holds *linear* RGB, which is what the shader lights and what tweens
//! interpolate. CSS-style inputs (`#rrggbb`, `rgb(r, g, b)`) are sRGB encoded
//! and are converted on the way in.

use crate::error::SceneError;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, SceneError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidHexColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| SceneError::InvalidHexColor(hex.to_string()))
        };
        Ok(Self::from_srgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
        }
    }

    #[inline]
    pub fn lerp(self, to: Color, t: f32) -> Color {
        Color {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
        }
    }

    #[inline]
    pub fn to_array4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

/// Channel triple derived from the pointer position.
///
/// Channels are signed and unclamped: a pointer outside the viewport yields
/// values outside `0..=255`. Saturation only happens in [`DerivedRgb::to_color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedRgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl DerivedRgb {
    /// `rgb(r, g, b)` as CSS would read it: each channel saturated to 0..=255.
    pub fn to_color(self) -> Color {
        let sat = |c: i32| c.clamp(0, 255) as u8;
        Color::from_srgb8(sat(self.r), sat(self.g), sat(self.b))
    }

    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Map a pointer position (page pixels) to a color triple.
///
/// `R = round(255·x/w)`, `G = round(255·y/h)`, `B = round(255·(x/w)·(y/h))`.
pub fn derive_rgb(pointer_x: f64, pointer_y: f64, viewport: &Viewport) -> DerivedRgb {
    let ny = pointer_y / viewport.height();
    let nx = pointer_x / viewport.width();
    let nz = ny * nx;
    DerivedRgb {
        r: to_channel(nx),
        g: to_channel(ny),
        b: to_channel(nz),
    }
}

/// Halves round toward +inf (`-127.5 -> -127`), like `Math.round`.
#[inline]
fn to_channel(n: f64) -> i32 {
    (n * 255.0 + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_base_color() {
        let c = Color::from_hex("#00ff83").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 1.0).abs() < 1e-6);
        assert!(c.b > 0.2 && c.b < 0.25);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Color::from_hex("#00ff8").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn srgb_endpoints_are_fixed_points() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn derived_rgb_saturates_only_when_converted() {
        let d = DerivedRgb {
            r: 300,
            g: -20,
            b: 128,
        };
        assert_eq!(d.css(), "rgb(300,-20,128)");
        let c = d.to_color();
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
    }
}
