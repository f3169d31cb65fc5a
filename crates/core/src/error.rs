//! Error types for the driftfield core.

use thiserror::Error;

/// Errors produced by field, configuration, and rendering operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero, negative, or non-finite.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration value was out of range or non-finite.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A requested preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The rendering surface is missing or was torn down mid-animation.
    #[error("surface unavailable: {0}")]
    Surface(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
