//! Error types for the core direction algebra.

use std::error::Error;
use std::fmt;

/// Errors from direction conversions.
///
/// These indicate contract violations on the caller's side: fail fast,
/// non-recoverable, never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionError {
    /// The vector is not one of the four unit vectors.
    InvalidVector {
        /// The offending x component.
        x: i32,
        /// The offending y component.
        y: i32,
    },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVector { x, y } => {
                write!(f, "({x}, {y}) is not a unit vector")
            }
        }
    }
}

impl Error for DirectionError {}
