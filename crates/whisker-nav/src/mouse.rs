//! The mouse core: state machine, exploration, retrace, and rush replay.

use crate::config::{ConfigError, GoalRegion, NavConfig};
use crate::error::NavError;
use crate::metrics::NavMetrics;
use std::fmt;
use whisker_core::{Coord, Dir4, Hardware, Rel4};
use whisker_maze::{Maze, WallSnapshot};

/// Relative directions probed during the sensing step. Backward is never
/// queried; the mouse just came from there.
const SENSE_ORDER: [Rel4; 3] = [Rel4::Front, Rel4::Right, Rel4::Left];

/// Cell payload of the belief maze: how many times the mouse has entered
/// the cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitCell {
    /// Times the mouse has entered this cell, the start cell counting as
    /// entered once at construction.
    pub visits: u32,
}

/// Edge metadata of the belief maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrailEdge {
    /// Whether the explorer has crossed this edge.
    pub traversed: bool,
}

/// The mouse's private wall map plus exploration metadata.
pub type BeliefMaze = Maze<VisitCell, TrailEdge>;

/// Operating state of the mouse.
///
/// The machine runs exactly one exploration pass: no transition re-enters
/// `Exploring`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavState {
    /// Searching for the goal block; the initial state.
    Exploring,
    /// Retracing the recorded trail back to the start cell.
    ReturningToStart,
    /// Replaying the compressed route toward the goal at speed.
    RushingToFinish,
    /// Idle; no hardware calls are issued.
    Stopped,
}

/// What a single [`Mouse::advance`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The mouse is stopped; nothing was issued.
    Idle,
    /// One exploration step: sensed, chose, moved one cell.
    Explored {
        /// The absolute heading moved in.
        heading: Dir4,
    },
    /// One retrace step toward the start.
    Returned {
        /// The absolute heading moved in.
        heading: Dir4,
    },
    /// One compressed run of the rush replay.
    Rushed {
        /// The absolute heading of the run.
        heading: Dir4,
        /// Cells covered by the single move command.
        run: u32,
    },
}

/// A micromouse navigating an unknown maze.
///
/// The mouse owns its belief maze (fully walled at construction; sensing
/// only ever removes walls), its pose, the trail stack recorded while
/// exploring, and the boxed [`Hardware`] capability. One call to
/// [`advance`](Self::advance) performs exactly one policy step for the
/// current state and issues at most one motion-committing hardware call.
///
/// # Examples
///
/// ```
/// use whisker_core::{Coord, Dir4, Hardware, Rel4};
/// use whisker_nav::{Mouse, NavConfig, NavState};
///
/// // A body whose world is an endless open field.
/// struct OpenField;
/// impl Hardware for OpenField {
///     fn check_wall(&mut self, _rel: Rel4) -> bool { false }
///     fn move_forward(&mut self, _steps: u32) {}
///     fn turn(&mut self, _delta: Rel4) {}
/// }
///
/// let mut mouse = Mouse::new(NavConfig::default(), Box::new(OpenField)).unwrap();
/// assert_eq!(mouse.state(), NavState::Exploring);
///
/// mouse.advance().unwrap();
/// // Facing up with everything open, the explorer prefers straight ahead.
/// assert_eq!(mouse.position(), Coord::new(0, 14));
/// assert_eq!(mouse.trail(), &[Dir4::Up]);
/// ```
pub struct Mouse {
    start: Coord,
    goal: GoalRegion,
    position: Coord,
    orientation: Dir4,
    state: NavState,
    belief: BeliefMaze,
    /// Absolute directions taken while exploring; consumed by the retrace.
    trail: Vec<Dir4>,
    /// Immutable snapshot of the trail, taken when exploration ends.
    replay: Vec<Dir4>,
    cursor: usize,
    hardware: Box<dyn Hardware>,
    metrics: NavMetrics,
}

impl Mouse {
    /// Create a mouse at the configured start pose with a fully walled
    /// belief maze. The start cell counts as visited once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails
    /// [`NavConfig::validate`].
    pub fn new(config: NavConfig, hardware: Box<dyn Hardware>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut belief = BeliefMaze::new(config.side)?;
        belief.cell_mut(config.start).visits = 1;
        Ok(Self {
            start: config.start,
            goal: config.goal(),
            position: config.start,
            orientation: config.heading,
            state: NavState::Exploring,
            belief,
            trail: Vec::new(),
            replay: Vec::new(),
            cursor: 0,
            hardware,
            metrics: NavMetrics::default(),
        })
    }

    /// Execute one policy step for the current state.
    ///
    /// # Errors
    ///
    /// Fails fast on [`NavError`]; the mouse's last committed state is left
    /// intact and there is no retry.
    pub fn advance(&mut self) -> Result<Advance, NavError> {
        match self.state {
            NavState::Stopped => {
                self.metrics.idle_ticks += 1;
                Ok(Advance::Idle)
            }
            NavState::Exploring => {
                self.metrics.explore_ticks += 1;
                self.explore_step()
            }
            NavState::ReturningToStart => {
                self.metrics.return_ticks += 1;
                self.return_step()
            }
            NavState::RushingToFinish => {
                self.metrics.rush_ticks += 1;
                self.rush_step()
            }
        }
    }

    // ── Telemetry ───────────────────────────────────────────────

    /// Current operating state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Current absolute heading.
    pub fn orientation(&self) -> Dir4 {
        self.orientation
    }

    /// The configured start cell.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The 2×2 center goal block.
    pub fn goal(&self) -> GoalRegion {
        self.goal
    }

    /// Read-only view of the belief maze.
    pub fn belief(&self) -> &BeliefMaze {
        &self.belief
    }

    /// Snapshot of the discovered wall map, for visualization
    /// collaborators.
    pub fn belief_snapshot(&self) -> WallSnapshot {
        self.belief.snapshot()
    }

    /// The live trail stack of absolute directions taken while exploring.
    pub fn trail(&self) -> &[Dir4] {
        &self.trail
    }

    /// The immutable replay sequence driving the rush phase. Empty until
    /// exploration ends.
    pub fn replay_sequence(&self) -> &[Dir4] {
        &self.replay
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &NavMetrics {
        &self.metrics
    }

    /// The hardware capability, for drivers that need to reach the
    /// concrete collaborator via `downcast_ref`.
    pub fn hardware(&self) -> &dyn Hardware {
        self.hardware.as_ref()
    }

    // ── Exploration ─────────────────────────────────────────────

    /// One flood-fill step: sense three ways, move into the least-visited
    /// open neighbour, maintain the trail stack.
    fn explore_step(&mut self) -> Result<Advance, NavError> {
        self.sense()?;

        // Scan Front, Right, Back, Left; replace the candidate only on a
        // strictly lower visit count, so ties keep the higher priority.
        let mut chosen: Option<(Dir4, u32)> = None;
        for rel in Rel4::ALL {
            let abs = self.orientation + rel;
            if !self.belief.is_open(self.position, abs) {
                continue;
            }
            let visits = self.belief.cell(self.position + abs.vector()).visits;
            match chosen {
                Some((_, best)) if visits >= best => {}
                _ => chosen = Some((abs, visits)),
            }
        }
        let Some((heading, _)) = chosen else {
            return Err(NavError::NoOpenDirection { at: self.position });
        };

        // A move that exactly reverses the last recorded one cancels the
        // pair instead of recording a detour.
        if self.trail.last() == Some(&heading.opposite()) {
            self.trail.pop();
        } else {
            self.trail.push(heading);
        }

        self.turn_to(heading);
        self.belief.edge_mut(self.position, heading)?.meta.traversed = true;
        self.commit_move(heading, 1);
        self.belief.cell_mut(self.position).visits += 1;

        if self.goal.contains(self.position) {
            self.replay = self.trail.clone();
            self.state = NavState::ReturningToStart;
        }
        Ok(Advance::Explored { heading })
    }

    /// Probe Front, Right, Left and permanently open any belief edge the
    /// hardware reports clear. Edges leading off the grid are not probed.
    fn sense(&mut self) -> Result<(), NavError> {
        for rel in SENSE_ORDER {
            let abs = self.orientation + rel;
            if !self.belief.within_bounds(self.position, abs) {
                continue;
            }
            self.metrics.wall_probes += 1;
            if self.hardware.check_wall(rel) {
                continue;
            }
            let edge = self.belief.edge_mut(self.position, abs)?;
            if edge.has_wall {
                edge.has_wall = false;
                self.metrics.walls_opened += 1;
            }
        }
        Ok(())
    }

    // ── Retrace ─────────────────────────────────────────────────

    /// One retrace step: undo the most recent recorded move.
    fn return_step(&mut self) -> Result<Advance, NavError> {
        let Some(recorded) = self.trail.pop() else {
            // Nothing recorded; fall through to the rush phase.
            self.state = NavState::RushingToFinish;
            self.cursor = 0;
            return Ok(Advance::Idle);
        };
        let heading = recorded.opposite();
        self.turn_to(heading);
        self.commit_move(heading, 1);

        if self.trail.is_empty() {
            debug_assert_eq!(self.position, self.start);
            self.state = NavState::RushingToFinish;
            self.cursor = 0;
        }
        Ok(Advance::Returned { heading })
    }

    // ── Rush ────────────────────────────────────────────────────

    /// One rush step: turn once, then cover the whole straight run of the
    /// replay sequence with a single move command.
    fn rush_step(&mut self) -> Result<Advance, NavError> {
        if self.cursor >= self.replay.len() {
            if self.goal.contains(self.position) {
                self.state = NavState::Stopped;
            }
            return Ok(Advance::Idle);
        }

        let heading = self.replay[self.cursor];
        let run = self.replay[self.cursor..]
            .iter()
            .take_while(|&&dir| dir == heading)
            .count();
        self.turn_to(heading);
        self.commit_move(heading, run as u32);
        self.cursor += run;
        self.metrics.rush_runs += 1;

        if self.cursor == self.replay.len() && self.goal.contains(self.position) {
            self.state = NavState::Stopped;
        }
        Ok(Advance::Rushed {
            heading,
            run: run as u32,
        })
    }

    // ── Hardware primitives ─────────────────────────────────────

    /// Rotate to an absolute heading. The orientation field is committed
    /// first; the hardware only ever receives the delta.
    fn turn_to(&mut self, target: Dir4) {
        let delta = target - self.orientation;
        self.orientation = target;
        self.hardware.turn(delta);
        self.metrics.turn_commands += 1;
    }

    /// Issue one forward move and track the new position.
    fn commit_move(&mut self, heading: Dir4, steps: u32) {
        debug_assert_eq!(heading, self.orientation);
        self.hardware.move_forward(steps);
        self.position = self.position + steps as i32 * heading.vector();
        self.metrics.move_commands += 1;
        self.metrics.cells_moved += u64::from(steps);
    }
}

impl fmt::Debug for Mouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mouse")
            .field("state", &self.state)
            .field("position", &self.position)
            .field("orientation", &self.orientation)
            .field("trail_len", &self.trail.len())
            .field("replay_cursor", &self.cursor)
            .finish()
    }
}
