use thiserror::Error;

/// Errors originating from the core engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Invalid width/height dimensions.
    #[error("invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Matching was requested against an empty character set.
    #[error("active character set is empty")]
    EmptyCharset,

    /// The active character set is below the minimum size for a render.
    #[error("character set too small: {size} (minimum 2)")]
    CharsetTooSmall {
        /// Current size of the active set.
        size: usize,
    },

    /// Requested partition resolution outside the valid bound.
    #[error("resolution {requested} outside [{min}, {max}]")]
    ResolutionOutOfRange {
        /// Requested column count.
        requested: u32,
        /// Smallest permitted resolution.
        min: u32,
        /// Largest permitted resolution.
        max: u32,
    },
}
