//! Error types for the navigation core.

use std::error::Error;
use std::fmt;
use whisker_core::Coord;
use whisker_maze::GridError;

/// Errors from [`Mouse::advance`](crate::Mouse::advance).
///
/// There is no retry logic in the core: every variant signals a fault that
/// aborts the run. Hardware calls are assumed to succeed before returning
/// or to abort on the collaborator's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavError {
    /// A belief-maze edge lookup failed, which indicates a navigation
    /// bookkeeping bug rather than anything the driver did.
    Grid(GridError),
    /// Every direction out of the current cell reads as walled, so no move
    /// can be committed. With a well-formed maze this only happens when the
    /// start cell is sealed.
    NoOpenDirection {
        /// The cell the mouse is stuck in.
        at: Coord,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(inner) => write!(f, "belief maze lookup failed: {inner}"),
            Self::NoOpenDirection { at } => {
                write!(f, "no open direction out of {at}")
            }
        }
    }
}

impl Error for NavError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(inner) => Some(inner),
            Self::NoOpenDirection { .. } => None,
        }
    }
}

impl From<GridError> for NavError {
    fn from(inner: GridError) -> Self {
        Self::Grid(inner)
    }
}
