//! Micromouse navigation core.
//!
//! A [`Mouse`] discovers an unknown maze by local wall sensing, finds the
//! 2×2 center goal block, retraces its recorded route to the start, then
//! replays a run-length-compressed version of that route at speed. The
//! driver calls [`Mouse::advance`] once per tick; the mouse dispatches to
//! the policy for its current [`NavState`] and talks to the world only
//! through the `Hardware` capability.
//!
//! The mouse's knowledge lives in a private belief maze that starts fully
//! walled; sensing only ever removes walls, never adds them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod metrics;
mod mouse;

pub use config::{ConfigError, GoalRegion, NavConfig};
pub use error::NavError;
pub use metrics::NavMetrics;
pub use mouse::{Advance, BeliefMaze, Mouse, NavState, TrailEdge, VisitCell};
