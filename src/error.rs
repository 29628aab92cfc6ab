use thiserror::Error;

/// Errors raised while assembling the sketch pad configuration.
///
/// The drawing core itself never fails; these only come from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SketchError {
    #[error("Invalid canvas size {width}x{height}: both dimensions must be positive")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("UTC offset of {0} minutes is outside -14h..=+14h")]
    InvalidUtcOffset(i32),

    #[error("Invalid value {value:?} for {key}")]
    InvalidOverride { key: &'static str, value: String },
}

/// Result type for configuration operations
pub type SketchResult<T> = Result<T, SketchError>;
