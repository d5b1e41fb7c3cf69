//! Simulated hardware collaborator for the Whisker micromouse suite.
//!
//! [`SimHardware`] implements the three-operation `Hardware` contract on
//! top of a private ground-truth maze, keeping its own pose the way a
//! physical body would. Ground truth and the mouse's belief never share
//! storage; information flows one way, through the sensing calls.
//!
//! [`generate`] builds reproducible random mazes from a seed, and
//! [`scenario`] holds hand-carved preset worlds shared by tests and
//! benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod generate;
mod hardware;
pub mod scenario;

pub use generate::generate;
pub use hardware::{HardwareCall, SimHardware, TravelEdge, WorldMaze};
pub use scenario::Scenario;
