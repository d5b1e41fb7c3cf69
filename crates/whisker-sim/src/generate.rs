//! Seeded random maze generation.

use crate::hardware::WorldMaze;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use whisker_core::{Coord, Dir4};
use whisker_maze::GridError;

/// Generate a reproducible random maze of the given side length.
///
/// The layout is carved with an iterative recursive-backtracker seeded by
/// `seed`: identical inputs produce identical mazes. The result is a
/// spanning passage tree — every cell reachable from every other — and for
/// even sides of at least 4 the four interior edges of the center goal
/// block are opened afterwards so the goal is a connected room.
///
/// # Errors
///
/// Propagates [`GridError`] from maze construction (side 0 or above the
/// maximum).
///
/// # Examples
///
/// ```
/// use whisker_sim::generate;
///
/// let a = generate(8, 42).unwrap();
/// let b = generate(8, 42).unwrap();
/// assert_eq!(a.snapshot(), b.snapshot());
/// ```
pub fn generate(side: u32, seed: u64) -> Result<WorldMaze, GridError> {
    let mut maze = WorldMaze::new(side)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side_i = side as i32;
    let index = |c: Coord| (side_i * c.y + c.x) as usize;

    let mut visited = vec![false; maze.cell_count()];
    let mut stack = vec![Coord::new(0, 0)];
    visited[0] = true;

    while let Some(&at) = stack.last() {
        let unvisited: SmallVec<[Dir4; 4]> = Dir4::ALL
            .into_iter()
            .filter(|&dir| {
                maze.within_bounds(at, dir) && !visited[index(at + dir.vector())]
            })
            .collect();
        if unvisited.is_empty() {
            stack.pop();
            continue;
        }
        let dir = unvisited[rng.random_range(0..unvisited.len())];
        maze.open_edge(at, dir)?;
        let next = at + dir.vector();
        visited[index(next)] = true;
        stack.push(next);
    }

    open_center_room(&mut maze)?;
    Ok(maze)
}

/// Open the four interior edges of the 2×2 center block. No-op for sides
/// where the block is undefined.
fn open_center_room(maze: &mut WorldMaze) -> Result<(), GridError> {
    let side = maze.side();
    if side < 4 || side % 2 != 0 {
        return Ok(());
    }
    let half = (side / 2) as i32;
    let nw = Coord::new(half - 1, half - 1);
    let se = Coord::new(half, half);
    maze.open_edge(nw, Dir4::Right)?;
    maze.open_edge(nw, Dir4::Down)?;
    maze.open_edge(se, Dir4::Left)?;
    maze.open_edge(se, Dir4::Up)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Breadth-first reachable-cell count from the origin.
    fn reachable_cells(maze: &WorldMaze) -> usize {
        let side = maze.side() as i32;
        let index = |c: Coord| (side * c.y + c.x) as usize;
        let mut seen = vec![false; maze.cell_count()];
        let mut frontier = vec![Coord::new(0, 0)];
        seen[0] = true;
        let mut count = 1;
        while let Some(at) = frontier.pop() {
            for dir in maze.open_neighbours(at) {
                let next = at + dir.vector();
                if !seen[index(next)] {
                    seen[index(next)] = true;
                    count += 1;
                    frontier.push(next);
                }
            }
        }
        count
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(16, 400).unwrap();
        let b = generate(16, 400).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(16, 1).unwrap();
        let b = generate(16, 2).unwrap();
        assert_ne!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn center_room_is_open() {
        let maze = generate(8, 7).unwrap();
        let nw = Coord::new(3, 3);
        assert!(maze.is_open(nw, Dir4::Right));
        assert!(maze.is_open(nw, Dir4::Down));
        assert!(maze.is_open(Coord::new(4, 4), Dir4::Left));
        assert!(maze.is_open(Coord::new(4, 4), Dir4::Up));
    }

    proptest! {
        #[test]
        fn every_cell_is_reachable(side in 2u32..12, seed in 0u64..200) {
            let maze = generate(side, seed).unwrap();
            prop_assert_eq!(reachable_cells(&maze), maze.cell_count());
        }
    }
}
