//! 4-bit wall-mask codec: snapshots for renderers and test fixtures.
//!
//! Each cell is described by one byte whose low four bits record its walls
//! in `Up, Right, Down, Left` bit order. Masks are redundant — the two
//! cells flanking an edge both describe it — so loading validates that the
//! redundancy is consistent before trusting it.

use crate::error::GridError;
use crate::grid::Maze;
use whisker_core::{Coord, Dir4};

/// Wall bit for [`Dir4::Up`].
pub const UP: u8 = 0b0001;
/// Wall bit for [`Dir4::Right`].
pub const RIGHT: u8 = 0b0010;
/// Wall bit for [`Dir4::Down`].
pub const DOWN: u8 = 0b0100;
/// Wall bit for [`Dir4::Left`].
pub const LEFT: u8 = 0b1000;

/// The wall bit for a direction.
pub fn bit(dir: Dir4) -> u8 {
    match dir {
        Dir4::Up => UP,
        Dir4::Right => RIGHT,
        Dir4::Down => DOWN,
        Dir4::Left => LEFT,
    }
}

/// An immutable wall-map snapshot: one 4-bit mask per cell in row-major
/// order.
///
/// This is the read-only view the navigation core hands to visualization
/// collaborators; it carries no cell or edge metadata, only walls. The
/// grid boundary reads as walls, exactly as it does on the live maze.
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4};
/// use whisker_maze::Maze;
///
/// let mut maze: Maze<(), ()> = Maze::new(2).unwrap();
/// maze.open_edge(Coord::new(0, 0), Dir4::Right).unwrap();
///
/// let snap = maze.snapshot();
/// assert!(snap.is_open(Coord::new(1, 0), Dir4::Left));
/// assert!(!snap.is_open(Coord::new(0, 0), Dir4::Down));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallSnapshot {
    side: u32,
    masks: Vec<u8>,
}

impl WallSnapshot {
    /// The side length `S`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The raw masks in row-major order, `side * side` bytes.
    pub fn masks(&self) -> &[u8] {
        &self.masks
    }

    /// The wall mask of the cell at `coord`.
    ///
    /// Off-grid coordinates report all four walls.
    pub fn mask(&self, coord: Coord) -> u8 {
        let side = self.side as i32;
        if (0..side).contains(&coord.x) && (0..side).contains(&coord.y) {
            self.masks[(side * coord.y + coord.x) as usize]
        } else {
            UP | RIGHT | DOWN | LEFT
        }
    }

    /// Whether the passage from `coord` in `dir` is open. Never fails;
    /// off-grid queries report `false`.
    pub fn is_open(&self, coord: Coord, dir: Dir4) -> bool {
        let side = self.side as i32;
        let in_grid = (0..side).contains(&coord.x) && (0..side).contains(&coord.y);
        in_grid && self.mask(coord) & bit(dir) == 0
    }
}

impl<C, E> Maze<C, E> {
    /// The 4-bit wall mask of the cell at `coord`, counting the grid
    /// boundary as walls. Off-grid coordinates report all four walls.
    pub fn wall_mask(&self, coord: Coord) -> u8 {
        Dir4::ALL
            .into_iter()
            .filter(|&dir| !self.is_open(coord, dir))
            .fold(0, |mask, dir| mask | bit(dir))
    }

    /// Snapshot the wall state as one mask per cell.
    pub fn snapshot(&self) -> WallSnapshot {
        let side = self.side() as i32;
        let mut masks = Vec::with_capacity((side * side) as usize);
        for y in 0..side {
            for x in 0..side {
                masks.push(self.wall_mask(Coord::new(x, y)));
            }
        }
        WallSnapshot {
            side: self.side(),
            masks,
        }
    }
}

impl<C: Default, E: Default> Maze<C, E> {
    /// Build a maze from one wall mask per cell, row-major.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] / [`GridError::SideTooLarge`] as for
    ///   [`Maze::new`].
    /// - [`GridError::MaskLengthMismatch`] unless `masks.len() == side²`.
    /// - [`GridError::InvalidMask`] for bits above the low four.
    /// - [`GridError::OpenPerimeter`] when a mask opens an edge off the
    ///   grid.
    /// - [`GridError::AsymmetricMasks`] when the two cells flanking an
    ///   edge disagree about it.
    pub fn from_masks(side: u32, masks: &[u8]) -> Result<Self, GridError> {
        let mut maze = Self::new(side)?;
        let expected = maze.cell_count();
        if masks.len() != expected {
            return Err(GridError::MaskLengthMismatch {
                expected,
                actual: masks.len(),
            });
        }

        let at = |coord: Coord| masks[(side as i32 * coord.y + coord.x) as usize];
        for y in 0..side as i32 {
            for x in 0..side as i32 {
                let coord = Coord::new(x, y);
                let mask = at(coord);
                if mask & !(UP | RIGHT | DOWN | LEFT) != 0 {
                    return Err(GridError::InvalidMask { x, y, mask });
                }
                for dir in Dir4::ALL {
                    let open = mask & bit(dir) == 0;
                    if !maze.within_bounds(coord, dir) {
                        if open {
                            return Err(GridError::OpenPerimeter { x, y, dir });
                        }
                        continue;
                    }
                    let far_open = at(coord + dir.vector()) & bit(dir.opposite()) == 0;
                    if open != far_open {
                        return Err(GridError::AsymmetricMasks { x, y, dir });
                    }
                    if open {
                        maze.open_edge(coord, dir)?;
                    }
                }
            }
        }
        Ok(maze)
    }
}
