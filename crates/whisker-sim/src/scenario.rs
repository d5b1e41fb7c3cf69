//! Hand-carved preset worlds shared by tests and benchmarks.

use crate::hardware::{SimHardware, WorldMaze};
use indexmap::IndexMap;
use whisker_core::{Coord, Dir4};
use whisker_maze::GridError;

/// A named preset world plus the pose a mouse should start from.
///
/// Scenarios are data, not behavior: drivers build the world and feed it to
/// whatever navigation stack they are testing.
#[derive(Clone, Copy)]
pub struct Scenario {
    /// Scenario name, the key in [`library`].
    pub name: &'static str,
    /// World side length.
    pub side: u32,
    /// Where the mouse starts.
    pub start: Coord,
    /// The mouse's starting heading.
    pub heading: Dir4,
    carve: fn(&mut WorldMaze) -> Result<(), GridError>,
}

impl Scenario {
    /// Build the ground-truth world for this scenario.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`] from construction or carving; the presets
    /// in [`library`] never fail.
    pub fn world(&self) -> Result<WorldMaze, GridError> {
        let mut maze = WorldMaze::new(self.side)?;
        (self.carve)(&mut maze)?;
        Ok(maze)
    }

    /// Build a simulated body placed at this scenario's start pose.
    ///
    /// # Errors
    ///
    /// As for [`world`](Self::world).
    pub fn hardware(&self) -> Result<SimHardware, GridError> {
        Ok(SimHardware::new(self.world()?, self.start, self.heading))
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("side", &self.side)
            .field("start", &self.start)
            .field("heading", &self.heading)
            .finish()
    }
}

/// Carve a straight run of open edges from `at` in `dir`.
fn carve_run(
    maze: &mut WorldMaze,
    at: Coord,
    dir: Dir4,
    len: u32,
) -> Result<Coord, GridError> {
    let mut at = at;
    for _ in 0..len {
        maze.open_edge(at, dir)?;
        at = at + dir.vector();
    }
    Ok(at)
}

fn carve_corridor(maze: &mut WorldMaze) -> Result<(), GridError> {
    // Three cells straight up from (4, 7) into the goal cell (4, 4).
    carve_run(maze, Coord::new(4, 7), Dir4::Up, 3)?;
    Ok(())
}

fn carve_dogleg(maze: &mut WorldMaze) -> Result<(), GridError> {
    // Two cells right, then three up, first touching the goal at (3, 4).
    let corner = carve_run(maze, Coord::new(1, 7), Dir4::Right, 2)?;
    carve_run(maze, corner, Dir4::Up, 3)?;
    Ok(())
}

fn carve_stub(maze: &mut WorldMaze) -> Result<(), GridError> {
    // A single dead-end passage; the goal is unreachable by design of the
    // tests that use it.
    maze.open_edge(Coord::new(0, 7), Dir4::Right)?;
    Ok(())
}

fn carve_open_room(maze: &mut WorldMaze) -> Result<(), GridError> {
    let side = maze.side() as i32;
    for y in 0..side {
        for x in 0..side {
            let at = Coord::new(x, y);
            if maze.within_bounds(at, Dir4::Right) {
                maze.open_edge(at, Dir4::Right)?;
            }
            if maze.within_bounds(at, Dir4::Down) {
                maze.open_edge(at, Dir4::Down)?;
            }
        }
    }
    Ok(())
}

/// The preset scenarios, in a fixed, deterministic order.
///
/// | Name | World |
/// |---|---|
/// | `corridor` | A straight three-cell passage from the start into the goal block. |
/// | `dogleg` | Two cells right then three up; one turn, first goal contact at the run's end. |
/// | `stub` | A single dead-end passage off the start; the goal is unreachable. |
/// | `open_room` | Every interior edge open. |
///
/// # Examples
///
/// ```
/// use whisker_sim::scenario;
///
/// let presets = scenario::library();
/// let corridor = &presets["corridor"];
/// assert_eq!(corridor.side, 8);
/// assert!(corridor.world().unwrap().is_open(corridor.start, corridor.heading));
/// ```
pub fn library() -> IndexMap<&'static str, Scenario> {
    let presets = [
        Scenario {
            name: "corridor",
            side: 8,
            start: Coord::new(4, 7),
            heading: Dir4::Up,
            carve: carve_corridor,
        },
        Scenario {
            name: "dogleg",
            side: 8,
            start: Coord::new(1, 7),
            heading: Dir4::Up,
            carve: carve_dogleg,
        },
        Scenario {
            name: "stub",
            side: 8,
            start: Coord::new(0, 7),
            heading: Dir4::Up,
            carve: carve_stub,
        },
        Scenario {
            name: "open_room",
            side: 8,
            start: Coord::new(0, 7),
            heading: Dir4::Up,
            carve: carve_open_room,
        },
    ];
    presets.into_iter().map(|s| (s.name, s)).collect()
}
