use thiserror::Error;

/// Errors raised when host input crosses into the widget.
///
/// Widget operations themselves never fail; only payloads coming from the
/// host (touch points, layout sizes, colour strings) are checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("touch location ({x}, {y}) is not finite")]
    NonFiniteTouch { x: f32, y: f32 },

    #[error("layout size {width}x{height} is not finite")]
    NonFiniteLayout { width: f32, height: f32 },

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
