use crate::error::SceneError;

/// Page viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SceneError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    /// Drawing surface size in physical pixels for `pixel_ratio`, each side
    /// clamped to `[1, max_dimension]`.
    pub fn backing_size(&self, pixel_ratio: f64, max_dimension: u32) -> (u32, u32) {
        let max = max_dimension.max(1) as f64;
        let w = (self.width * pixel_ratio).round().clamp(1.0, max) as u32;
        let h = (self.height * pixel_ratio).round().clamp(1.0, max) as u32;
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_non_finite() {
        assert!(Viewport::new(0.0, 10.0).is_err());
        assert!(Viewport::new(10.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 10.0).is_err());
        assert!(Viewport::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn backing_size_scales_and_clamps() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.backing_size(3.0, 8192), (2400, 1800));
        let wide = Viewport::new(3840.0, 2160.0).unwrap();
        assert_eq!(wide.backing_size(3.0, 8192), (8192, 6480));
    }
}
