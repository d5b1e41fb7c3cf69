//! Cumulative navigation telemetry.

/// Counters accumulated over a mouse's lifetime.
///
/// The core performs no logging; drivers poll these counters (and the other
/// read-only accessors) for whatever observability they need.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMetrics {
    /// Advances spent exploring.
    pub explore_ticks: u64,
    /// Advances spent retracing to the start.
    pub return_ticks: u64,
    /// Advances spent rushing the recorded route.
    pub rush_ticks: u64,
    /// Advances that found the mouse stopped and did nothing.
    pub idle_ticks: u64,
    /// Wall probes issued to the hardware.
    pub wall_probes: u64,
    /// Belief-maze walls removed by sensing.
    pub walls_opened: u64,
    /// Turn commands issued to the hardware.
    pub turn_commands: u64,
    /// Move commands issued to the hardware.
    pub move_commands: u64,
    /// Total cells travelled across all move commands.
    pub cells_moved: u64,
    /// Compressed runs replayed during the rush phase.
    pub rush_runs: u64,
}
