//! Crate-level error types.

use std::fmt;

/// Errors produced by the touchspin crate.
#[derive(Debug)]
pub enum TouchspinError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Touch trace could not be parsed.
    TraceParse(serde_json::Error),
    /// Scale bounds violate `min <= standard <= max` or are not finite.
    InvalidScaleBounds {
        /// Requested reset scale.
        standard: f32,
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },
}

impl fmt::Display for TouchspinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TraceParse(e) => write!(f, "trace parse error: {e}"),
            Self::InvalidScaleBounds { standard, min, max } => write!(
                f,
                "invalid scale bounds: need {min} <= {standard} <= {max}"
            ),
        }
    }
}

impl std::error::Error for TouchspinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TraceParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TouchspinError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TouchspinError {
    fn from(e: serde_json::Error) -> Self {
        Self::TraceParse(e)
    }
}
