//! The generic square wall-grid container.

use crate::error::GridError;
use smallvec::SmallVec;
use whisker_core::{Coord, Dir4};

/// Maximum supported side length.
///
/// Coordinates use `i32` and the mask codec indexes cells with `usize`;
/// this bound keeps both cell and edge counts comfortably in range.
pub const MAX_SIDE: u32 = 4096;

/// One edge of the grid: the boundary between two adjacent cells.
///
/// Every edge starts walled. `meta` carries policy-specific metadata (a
/// traversal flag for the explorer, a travel counter for a simulator);
/// the container itself only interprets `has_wall`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeState<E> {
    /// Whether a wall blocks this edge.
    pub has_wall: bool,
    /// Policy-specific edge metadata.
    pub meta: E,
}

impl<E: Default> Default for EdgeState<E> {
    fn default() -> Self {
        Self {
            has_wall: true,
            meta: E::default(),
        }
    }
}

/// A square grid of cells with shared per-edge wall state.
///
/// Parameterized over the cell payload `C` and the edge metadata `E`; the
/// container attaches no meaning to either. A maze of side `S` owns `S*S`
/// cell payloads and `2*(S-1)*S` edges, split into a vertical-step half
/// (edges crossed moving `Up`/`Down`) and a horizontal-step half (edges
/// crossed moving `Right`/`Left`).
///
/// The edge between `(x, y)` and its neighbour in direction `d` resolves to
/// the same storage slot whichever of the two cells the query starts from;
/// that symmetry is a standing invariant.
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4};
/// use whisker_maze::Maze;
///
/// let mut maze: Maze<(), ()> = Maze::new(4).unwrap();
/// let c = Coord::new(1, 1);
///
/// // Every edge starts walled; the boundary is not an edge at all.
/// assert!(!maze.is_open(c, Dir4::Right));
/// assert!(!maze.within_bounds(Coord::new(0, 0), Dir4::Up));
///
/// // Opening from one side is visible from the other.
/// maze.open_edge(c, Dir4::Right).unwrap();
/// assert!(maze.is_open(Coord::new(2, 1), Dir4::Left));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Maze<C, E> {
    side: u32,
    cells: Vec<C>,
    /// Edges crossed by vertical steps, `(side - 1)` per column.
    v_edges: Vec<EdgeState<E>>,
    /// Edges crossed by horizontal steps, `(side - 1)` per row.
    h_edges: Vec<EdgeState<E>>,
}

impl<C: Default, E: Default> Maze<C, E> {
    /// Create a fully walled maze of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for side 0 and
    /// [`GridError::SideTooLarge`] above [`MAX_SIDE`].
    pub fn new(side: u32) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::Empty);
        }
        if side > MAX_SIDE {
            return Err(GridError::SideTooLarge {
                side,
                max: MAX_SIDE,
            });
        }
        let s = side as usize;
        let cells = std::iter::repeat_with(C::default).take(s * s).collect();
        let edge_half = || {
            std::iter::repeat_with(EdgeState::default)
                .take((s - 1) * s)
                .collect()
        };
        Ok(Self {
            side,
            cells,
            v_edges: edge_half(),
            h_edges: edge_half(),
        })
    }
}

impl<C, E> Maze<C, E> {
    /// The side length `S`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of cells, `S * S`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the coordinate names a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        let side = self.side as i32;
        (0..side).contains(&coord.x) && (0..side).contains(&coord.y)
    }

    /// The payload of the cell at `coord`.
    ///
    /// The coordinate is caller-validated: out-of-grid coordinates are a
    /// contract violation, checked only by a debug assertion.
    pub fn cell(&self, coord: Coord) -> &C {
        debug_assert!(self.contains(coord), "cell {coord} is outside the grid");
        &self.cells[self.cell_index(coord)]
    }

    /// Mutable access to the payload of the cell at `coord`.
    ///
    /// Caller-validated like [`cell`](Self::cell).
    pub fn cell_mut(&mut self, coord: Coord) -> &mut C {
        debug_assert!(self.contains(coord), "cell {coord} is outside the grid");
        let index = self.cell_index(coord);
        &mut self.cells[index]
    }

    /// Whether the step from `coord` in `dir` stays on the grid.
    ///
    /// False exactly at the four grid edges (e.g. `Up` at `y == 0`).
    /// Never fails; callers rely on the degradation to treat the grid
    /// boundary as walls.
    pub fn within_bounds(&self, coord: Coord, dir: Dir4) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let limit = self.side as i32 - 1;
        match dir {
            Dir4::Up => coord.y > 0,
            Dir4::Right => coord.x < limit,
            Dir4::Down => coord.y < limit,
            Dir4::Left => coord.x > 0,
        }
    }

    /// The shared edge between `coord` and its neighbour in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EdgeOutOfRange`] when the step leaves the grid.
    /// That is a programming-error fault, not a runtime condition; probe
    /// with [`within_bounds`](Self::within_bounds) or
    /// [`is_open`](Self::is_open) first.
    pub fn edge(&self, coord: Coord, dir: Dir4) -> Result<&EdgeState<E>, GridError> {
        if !self.within_bounds(coord, dir) {
            return Err(GridError::EdgeOutOfRange {
                x: coord.x,
                y: coord.y,
                dir,
            });
        }
        Ok(match dir {
            Dir4::Up | Dir4::Down => &self.v_edges[self.v_index(coord, dir)],
            Dir4::Right | Dir4::Left => &self.h_edges[self.h_index(coord, dir)],
        })
    }

    /// Mutable access to the shared edge between `coord` and its neighbour.
    ///
    /// # Errors
    ///
    /// As for [`edge`](Self::edge).
    pub fn edge_mut(&mut self, coord: Coord, dir: Dir4) -> Result<&mut EdgeState<E>, GridError> {
        if !self.within_bounds(coord, dir) {
            return Err(GridError::EdgeOutOfRange {
                x: coord.x,
                y: coord.y,
                dir,
            });
        }
        Ok(match dir {
            Dir4::Up | Dir4::Down => {
                let index = self.v_index(coord, dir);
                &mut self.v_edges[index]
            }
            Dir4::Right | Dir4::Left => {
                let index = self.h_index(coord, dir);
                &mut self.h_edges[index]
            }
        })
    }

    /// Whether the passage from `coord` in `dir` is open.
    ///
    /// Never fails: off-grid steps report `false`, so the boundary reads
    /// as walls.
    pub fn is_open(&self, coord: Coord, dir: Dir4) -> bool {
        match self.edge(coord, dir) {
            Ok(edge) => !edge.has_wall,
            Err(_) => false,
        }
    }

    /// Remove the wall on the edge between `coord` and its neighbour.
    ///
    /// Opening is idempotent and visible from both sides.
    ///
    /// # Errors
    ///
    /// As for [`edge`](Self::edge).
    pub fn open_edge(&mut self, coord: Coord, dir: Dir4) -> Result<(), GridError> {
        self.edge_mut(coord, dir)?.has_wall = false;
        Ok(())
    }

    /// The directions with an open passage out of `coord`, in fixed
    /// `Up, Right, Down, Left` order.
    pub fn open_neighbours(&self, coord: Coord) -> SmallVec<[Dir4; 4]> {
        Dir4::ALL
            .into_iter()
            .filter(|&dir| self.is_open(coord, dir))
            .collect()
    }

    fn cell_index(&self, coord: Coord) -> usize {
        (self.side as i32 * coord.y + coord.x) as usize
    }

    /// Slot of the edge crossed by a vertical step. Column `x` owns slots
    /// `(side - 1) * x ..`, one per interior boundary, so the `Up` edge of
    /// `(x, y)` and the `Down` edge of `(x, y - 1)` coincide.
    fn v_index(&self, coord: Coord, dir: Dir4) -> usize {
        let stride = self.side as i32 - 1;
        (stride * coord.x + coord.y - i32::from(dir == Dir4::Up)) as usize
    }

    /// Slot of the edge crossed by a horizontal step; mirror of
    /// [`v_index`](Self::v_index) with rows owning the slots.
    fn h_index(&self, coord: Coord, dir: Dir4) -> usize {
        let stride = self.side as i32 - 1;
        (stride * coord.y + coord.x - i32::from(dir == Dir4::Left)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Constructor ─────────────────────────────────────────────

    #[test]
    fn new_zero_side_returns_error() {
        assert_eq!(Maze::<(), ()>::new(0), Err(GridError::Empty));
    }

    #[test]
    fn new_rejects_side_above_max() {
        assert_eq!(
            Maze::<(), ()>::new(MAX_SIDE + 1),
            Err(GridError::SideTooLarge {
                side: MAX_SIDE + 1,
                max: MAX_SIDE,
            })
        );
        assert!(Maze::<(), ()>::new(1).is_ok());
    }

    #[test]
    fn starts_fully_walled() {
        let maze: Maze<(), ()> = Maze::new(3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                for dir in Dir4::ALL {
                    assert!(!maze.is_open(c(x, y), dir));
                }
            }
        }
    }

    // ── Bounds ──────────────────────────────────────────────────

    #[test]
    fn within_bounds_false_exactly_at_grid_edges() {
        let maze: Maze<(), ()> = Maze::new(4).unwrap();
        assert!(!maze.within_bounds(c(0, 0), Dir4::Up));
        assert!(!maze.within_bounds(c(0, 0), Dir4::Left));
        assert!(maze.within_bounds(c(0, 0), Dir4::Right));
        assert!(maze.within_bounds(c(0, 0), Dir4::Down));
        assert!(!maze.within_bounds(c(3, 3), Dir4::Down));
        assert!(!maze.within_bounds(c(3, 3), Dir4::Right));
        assert!(maze.within_bounds(c(3, 3), Dir4::Up));
        assert!(maze.within_bounds(c(3, 3), Dir4::Left));
    }

    #[test]
    fn within_bounds_false_off_grid() {
        let maze: Maze<(), ()> = Maze::new(4).unwrap();
        assert!(!maze.within_bounds(c(-1, 0), Dir4::Right));
        assert!(!maze.within_bounds(c(0, 4), Dir4::Up));
    }

    #[test]
    fn edge_out_of_range() {
        let maze: Maze<(), ()> = Maze::new(4).unwrap();
        assert_eq!(
            maze.edge(c(0, 0), Dir4::Up),
            Err(GridError::EdgeOutOfRange {
                x: 0,
                y: 0,
                dir: Dir4::Up,
            })
        );
    }

    #[test]
    fn is_open_never_fails_off_grid() {
        let maze: Maze<(), ()> = Maze::new(4).unwrap();
        assert!(!maze.is_open(c(-5, 17), Dir4::Down));
        assert!(!maze.is_open(c(0, 0), Dir4::Up));
    }

    // ── Shared edge state ───────────────────────────────────────

    #[test]
    fn open_edge_visible_from_both_sides() {
        let mut maze: Maze<(), ()> = Maze::new(4).unwrap();
        maze.open_edge(c(1, 2), Dir4::Up).unwrap();
        assert!(maze.is_open(c(1, 2), Dir4::Up));
        assert!(maze.is_open(c(1, 1), Dir4::Down));

        maze.open_edge(c(2, 2), Dir4::Left).unwrap();
        assert!(maze.is_open(c(1, 2), Dir4::Right));
    }

    #[test]
    fn edge_meta_is_shared_storage() {
        let mut maze: Maze<(), u32> = Maze::new(4).unwrap();
        maze.edge_mut(c(1, 1), Dir4::Right).unwrap().meta = 7;
        assert_eq!(maze.edge(c(2, 1), Dir4::Left).unwrap().meta, 7);
    }

    #[test]
    fn distinct_edges_do_not_alias() {
        let mut maze: Maze<(), ()> = Maze::new(4).unwrap();
        maze.open_edge(c(1, 1), Dir4::Right).unwrap();
        assert!(!maze.is_open(c(1, 1), Dir4::Left));
        assert!(!maze.is_open(c(1, 1), Dir4::Up));
        assert!(!maze.is_open(c(1, 1), Dir4::Down));
        assert!(!maze.is_open(c(2, 1), Dir4::Right));
    }

    // ── Cells and neighbours ────────────────────────────────────

    #[test]
    fn cell_payloads_are_per_cell() {
        let mut maze: Maze<u32, ()> = Maze::new(3).unwrap();
        *maze.cell_mut(c(2, 1)) = 9;
        assert_eq!(*maze.cell(c(2, 1)), 9);
        assert_eq!(*maze.cell(c(1, 2)), 0);
    }

    #[test]
    fn open_neighbours_in_fixed_order() {
        let mut maze: Maze<(), ()> = Maze::new(4).unwrap();
        let at = c(1, 1);
        maze.open_edge(at, Dir4::Left).unwrap();
        maze.open_edge(at, Dir4::Up).unwrap();
        maze.open_edge(at, Dir4::Down).unwrap();
        let dirs = maze.open_neighbours(at);
        assert_eq!(dirs.as_slice(), &[Dir4::Up, Dir4::Down, Dir4::Left]);
    }

    #[test]
    fn single_cell_grid_has_no_edges() {
        let maze: Maze<(), ()> = Maze::new(1).unwrap();
        assert_eq!(maze.cell_count(), 1);
        for dir in Dir4::ALL {
            assert!(!maze.within_bounds(c(0, 0), dir));
        }
        assert!(maze.open_neighbours(c(0, 0)).is_empty());
    }
}
