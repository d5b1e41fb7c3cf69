//! Mouse construction parameters and validation.

use std::error::Error;
use std::fmt;
use whisker_core::{Coord, Dir4};
use whisker_maze::MAX_SIDE;

/// Construction parameters for a [`Mouse`](crate::Mouse).
///
/// Grid size, start cell, and goal placement are configuration, not core
/// state; everything flows through this struct so the core is testable at
/// any even side length.
///
/// The default matches the classic competition layout: a 16×16 maze entered
/// at the bottom-left corner facing up.
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4};
/// use whisker_nav::NavConfig;
///
/// let config = NavConfig::default();
/// assert_eq!(config.side, 16);
/// assert_eq!(config.start, Coord::new(0, 15));
/// assert_eq!(config.heading, Dir4::Up);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Maze side length. Must be even, at least 4, at most
    /// [`MAX_SIDE`](whisker_maze::MAX_SIDE).
    pub side: u32,
    /// Starting cell. Must be in bounds and outside the goal block.
    pub start: Coord,
    /// Starting orientation.
    pub heading: Dir4,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            side: 16,
            start: Coord::new(0, 15),
            heading: Dir4::Up,
        }
    }
}

impl NavConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ConfigError`] variant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side < 4 {
            return Err(ConfigError::SideTooSmall { side: self.side });
        }
        if self.side % 2 != 0 {
            return Err(ConfigError::SideOdd { side: self.side });
        }
        if self.side > MAX_SIDE {
            return Err(ConfigError::SideTooLarge {
                side: self.side,
                max: MAX_SIDE,
            });
        }
        let limit = self.side as i32;
        if !(0..limit).contains(&self.start.x) || !(0..limit).contains(&self.start.y) {
            return Err(ConfigError::StartOutOfBounds { start: self.start });
        }
        if self.goal().contains(self.start) {
            return Err(ConfigError::StartInGoal { start: self.start });
        }
        Ok(())
    }

    /// The 2×2 center goal block for this side length.
    pub fn goal(&self) -> GoalRegion {
        GoalRegion::of_side(self.side)
    }
}

/// The 2×2 block of center cells that is the maze's target region.
///
/// For an even side `S` these are `(S/2−1, S/2−1)`, `(S/2−1, S/2)`,
/// `(S/2, S/2−1)`, and `(S/2, S/2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalRegion {
    min: Coord,
    max: Coord,
}

impl GoalRegion {
    /// The goal block of a maze with the given even side length.
    pub fn of_side(side: u32) -> Self {
        let half = (side / 2) as i32;
        Self {
            min: Coord::new(half - 1, half - 1),
            max: Coord::new(half, half),
        }
    }

    /// Whether the coordinate lies inside the goal block.
    pub fn contains(&self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x)
            && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// The four goal cells in row-major order.
    pub fn cells(&self) -> [Coord; 4] {
        [
            self.min,
            Coord::new(self.max.x, self.min.y),
            Coord::new(self.min.x, self.max.y),
            self.max,
        ]
    }
}

/// Errors detected by [`NavConfig::validate`] or mouse construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Building the belief maze failed.
    Grid(whisker_maze::GridError),
    /// The side length is below 4; the goal block would not fit strictly
    /// inside the maze.
    SideTooSmall {
        /// The configured side length.
        side: u32,
    },
    /// The side length is odd; the 2×2 center block is undefined.
    SideOdd {
        /// The configured side length.
        side: u32,
    },
    /// The side length exceeds the grid's maximum.
    SideTooLarge {
        /// The configured side length.
        side: u32,
        /// The maximum supported side length.
        max: u32,
    },
    /// The start cell lies outside the maze.
    StartOutOfBounds {
        /// The configured start cell.
        start: Coord,
    },
    /// The start cell lies inside the goal block, which would end the
    /// exploration pass before it begins.
    StartInGoal {
        /// The configured start cell.
        start: Coord,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(inner) => write!(f, "belief maze construction failed: {inner}"),
            Self::SideTooSmall { side } => {
                write!(f, "side length {side} is below the minimum of 4")
            }
            Self::SideOdd { side } => {
                write!(f, "side length {side} is odd; the center goal block needs an even side")
            }
            Self::SideTooLarge { side, max } => {
                write!(f, "side length {side} exceeds maximum {max}")
            }
            Self::StartOutOfBounds { start } => {
                write!(f, "start cell {start} is outside the maze")
            }
            Self::StartInGoal { start } => {
                write!(f, "start cell {start} is inside the goal block")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<whisker_maze::GridError> for ConfigError {
    fn from(inner: whisker_maze::GridError) -> Self {
        Self::Grid(inner)
    }
}
