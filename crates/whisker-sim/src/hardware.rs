//! The simulated mouse body: ground-truth maze, pose, and call log.

use whisker_core::{Coord, Dir4, Hardware, Rel4};
use whisker_maze::Maze;

/// Edge metadata of a ground-truth maze: how many times the simulated body
/// has driven across the edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TravelEdge {
    /// Crossings committed over this edge.
    pub travelled: u32,
}

/// A ground-truth maze: no cell payload, travel counters on the edges.
pub type WorldMaze = Maze<(), TravelEdge>;

/// One recorded hardware call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareCall {
    /// A wall probe and its answer.
    Sense {
        /// The probed relative direction.
        rel: Rel4,
        /// Whether a wall was reported.
        wall: bool,
    },
    /// A committed rotation.
    Turn {
        /// The rotation delta.
        delta: Rel4,
    },
    /// A committed forward move.
    Move {
        /// The absolute heading at commit time.
        heading: Dir4,
        /// Cells covered.
        steps: u32,
    },
}

/// A simulated mouse body implementing the `Hardware` contract.
///
/// The body owns the ground-truth maze and tracks its own position and
/// heading, exactly as a physical robot would: wall probes are answered
/// relative to the body's pose, turns rotate the pose, and moves walk it
/// cell by cell, bumping each crossed edge's travel counter. Every call is
/// appended to a log that tests inspect through [`log`](Self::log) and
/// [`moves`](Self::moves).
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4, Hardware, Rel4};
/// use whisker_sim::{SimHardware, WorldMaze};
///
/// let mut world = WorldMaze::new(4).unwrap();
/// world.open_edge(Coord::new(0, 3), Dir4::Up).unwrap();
///
/// let mut body = SimHardware::new(world, Coord::new(0, 3), Dir4::Up);
/// assert!(!body.check_wall(Rel4::Front));
/// assert!(body.check_wall(Rel4::Right));
///
/// body.move_forward(1);
/// assert_eq!(body.position(), Coord::new(0, 2));
/// ```
#[derive(Debug)]
pub struct SimHardware {
    world: WorldMaze,
    position: Coord,
    heading: Dir4,
    log: Vec<HardwareCall>,
}

impl SimHardware {
    /// Place a body in a ground-truth maze.
    ///
    /// # Panics
    ///
    /// Panics when `start` is outside the maze.
    pub fn new(world: WorldMaze, start: Coord, heading: Dir4) -> Self {
        assert!(
            world.contains(start),
            "start {start} is outside the {0}×{0} world",
            world.side()
        );
        Self {
            world,
            position: start,
            heading,
            log: Vec::new(),
        }
    }

    /// The body's current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// The body's current heading.
    pub fn heading(&self) -> Dir4 {
        self.heading
    }

    /// Read-only view of the ground-truth maze.
    pub fn world(&self) -> &WorldMaze {
        &self.world
    }

    /// Every hardware call committed so far, in order.
    pub fn log(&self) -> &[HardwareCall] {
        &self.log
    }

    /// The committed forward moves as `(heading, steps)` pairs.
    pub fn moves(&self) -> Vec<(Dir4, u32)> {
        self.log
            .iter()
            .filter_map(|call| match call {
                HardwareCall::Move { heading, steps } => Some((*heading, *steps)),
                _ => None,
            })
            .collect()
    }
}

impl Hardware for SimHardware {
    fn check_wall(&mut self, rel: Rel4) -> bool {
        let abs = self.heading + rel;
        let wall = !self.world.is_open(self.position, abs);
        self.log.push(HardwareCall::Sense { rel, wall });
        wall
    }

    /// Walk the pose forward cell by cell.
    ///
    /// The navigation core only commits moves it knows to be open, so a
    /// closed or off-grid edge here is a driver bug and the body panics —
    /// the simulated equivalent of crashing into a wall.
    fn move_forward(&mut self, steps: u32) {
        self.log.push(HardwareCall::Move {
            heading: self.heading,
            steps,
        });
        for _ in 0..steps {
            match self.world.edge_mut(self.position, self.heading) {
                Ok(edge) if !edge.has_wall => edge.meta.travelled += 1,
                _ => panic!(
                    "drove into a wall at {} heading {:?}",
                    self.position, self.heading
                ),
            }
            self.position = self.position + self.heading.vector();
        }
    }

    fn turn(&mut self, delta: Rel4) {
        self.heading = self.heading + delta;
        self.log.push(HardwareCall::Turn { delta });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_row_world() -> WorldMaze {
        // A 4×4 world with the top row fully open left-to-right.
        let mut world = WorldMaze::new(4).unwrap();
        for x in 0..3 {
            world.open_edge(Coord::new(x, 0), Dir4::Right).unwrap();
        }
        world
    }

    #[test]
    fn sense_answers_relative_to_pose() {
        let mut body = SimHardware::new(open_row_world(), Coord::new(0, 0), Dir4::Right);
        assert!(!body.check_wall(Rel4::Front));
        assert!(body.check_wall(Rel4::Right)); // Down is walled
        assert!(body.check_wall(Rel4::Left)); // Up is off the grid

        body.turn(Rel4::Left);
        assert_eq!(body.heading(), Dir4::Up);
        assert!(body.check_wall(Rel4::Front));
        assert!(!body.check_wall(Rel4::Right)); // Right again
    }

    #[test]
    fn moves_update_pose_and_travel_counters() {
        let mut body = SimHardware::new(open_row_world(), Coord::new(0, 0), Dir4::Right);
        body.move_forward(2);
        assert_eq!(body.position(), Coord::new(2, 0));
        assert_eq!(
            body.world()
                .edge(Coord::new(0, 0), Dir4::Right)
                .unwrap()
                .meta
                .travelled,
            1
        );
        assert_eq!(
            body.world()
                .edge(Coord::new(1, 0), Dir4::Right)
                .unwrap()
                .meta
                .travelled,
            1
        );
        assert_eq!(body.moves(), vec![(Dir4::Right, 2)]);
    }

    #[test]
    #[should_panic(expected = "drove into a wall")]
    fn driving_through_a_wall_panics() {
        let mut body = SimHardware::new(open_row_world(), Coord::new(0, 0), Dir4::Down);
        body.move_forward(1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn start_outside_world_panics() {
        SimHardware::new(open_row_world(), Coord::new(4, 0), Dir4::Up);
    }

    #[test]
    fn log_records_calls_in_order() {
        let mut body = SimHardware::new(open_row_world(), Coord::new(0, 0), Dir4::Right);
        body.check_wall(Rel4::Front);
        body.turn(Rel4::Front);
        body.move_forward(1);
        assert_eq!(
            body.log(),
            &[
                HardwareCall::Sense {
                    rel: Rel4::Front,
                    wall: false,
                },
                HardwareCall::Turn { delta: Rel4::Front },
                HardwareCall::Move {
                    heading: Dir4::Right,
                    steps: 1,
                },
            ]
        );
    }
}
