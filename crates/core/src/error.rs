//! Error types for medvis

use thiserror::Error;

/// Main error type for medvis operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid value range: vmin = {vmin}, vmax = {vmax} (range must be finite and non-empty)")]
    InvalidRange { vmin: f64, vmax: f64 },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Length mismatch: {colours} colours but {labels} labels")]
    LengthMismatch { colours: usize, labels: usize },

    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("Unknown colour: {0}")]
    UnknownColour(String),

    #[error("Input contains no finite values to derive a range from")]
    EmptyInput,

    #[error("Shape error: {0}")]
    Shape(String),

    #[error("{0}")]
    Other(String),
}

impl From<ndarray::ShapeError> for Error {
    fn from(e: ndarray::ShapeError) -> Self {
        Error::Shape(e.to_string())
    }
}

/// Result type alias for medvis operations
pub type Result<T> = std::result::Result<T, Error>;
