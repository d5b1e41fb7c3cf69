//! Error types for the maze grid.

use std::error::Error;
use std::fmt;
use whisker_core::Dir4;

/// Errors from maze construction and edge lookup.
///
/// Edge lookup failures are programming-error faults: the caller asked for
/// an edge that does not exist. The never-failing accessors
/// (`within_bounds`, `is_open`) degrade to `false` instead, which is how
/// callers treat the grid boundary as walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Side length 0 describes a grid with no cells.
    Empty,
    /// Side length exceeds [`MAX_SIDE`](crate::MAX_SIDE).
    SideTooLarge {
        /// The configured side length.
        side: u32,
        /// The maximum supported side length.
        max: u32,
    },
    /// The step from the coordinate in the given direction leaves the grid,
    /// so there is no edge there.
    EdgeOutOfRange {
        /// Query x coordinate.
        x: i32,
        /// Query y coordinate.
        y: i32,
        /// Query direction.
        dir: Dir4,
    },
    /// A wall-mask buffer does not hold one mask per cell.
    MaskLengthMismatch {
        /// Expected number of masks (`side * side`).
        expected: usize,
        /// Number of masks supplied.
        actual: usize,
    },
    /// A wall mask has bits set above the low four.
    InvalidMask {
        /// Cell x coordinate.
        x: i32,
        /// Cell y coordinate.
        y: i32,
        /// The offending mask byte.
        mask: u8,
    },
    /// Two adjacent wall masks disagree about their shared edge.
    AsymmetricMasks {
        /// Cell x coordinate on the lower-index side of the edge.
        x: i32,
        /// Cell y coordinate on the lower-index side of the edge.
        y: i32,
        /// Direction from that cell to the disagreeing neighbour.
        dir: Dir4,
    },
    /// A wall mask claims the grid perimeter is open.
    OpenPerimeter {
        /// Cell x coordinate.
        x: i32,
        /// Cell y coordinate.
        y: i32,
        /// Direction pointing off the grid.
        dir: Dir4,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze side length must be at least 1"),
            Self::SideTooLarge { side, max } => {
                write!(f, "maze side length {side} exceeds maximum {max}")
            }
            Self::EdgeOutOfRange { x, y, dir } => {
                write!(f, "no edge at ({x}, {y}) toward {dir:?}")
            }
            Self::MaskLengthMismatch { expected, actual } => {
                write!(f, "expected {expected} wall masks, got {actual}")
            }
            Self::InvalidMask { x, y, mask } => {
                write!(f, "wall mask {mask:#x} at ({x}, {y}) has bits above the low four")
            }
            Self::AsymmetricMasks { x, y, dir } => {
                write!(f, "wall masks disagree across the edge at ({x}, {y}) toward {dir:?}")
            }
            Self::OpenPerimeter { x, y, dir } => {
                write!(f, "wall mask at ({x}, {y}) opens the perimeter toward {dir:?}")
            }
        }
    }
}

impl Error for GridError {}
