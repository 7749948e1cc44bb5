use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("viewport must be finite and non-zero, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid hex color {0:?}")]
    InvalidHexColor(String),

    #[error("timeline step targets {0:?} but no elements matched")]
    EmptyTimelineTarget(String),
}
