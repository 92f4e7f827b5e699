//! Error types for tilt configuration.

use std::fmt;

/// Errors that can occur while validating a tilt configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TiltError {
    /// An axis name required by axes input is empty.
    EmptyAxisName { which: &'static str },
    /// A numeric configuration field is negative or not finite.
    InvalidField {
        field: &'static str,
        detail: String,
    },
}

impl fmt::Display for TiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxisName { which } => {
                write!(f, "axis name for the {which} axis is empty")
            }
            Self::InvalidField { field, detail } => {
                write!(f, "invalid value for {field}: {detail}")
            }
        }
    }
}

impl std::error::Error for TiltError {}

/// Result type for tilt configuration operations.
pub type TiltResult<T> = Result<T, TiltError>;
