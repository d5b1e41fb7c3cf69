//! Wall-grid maze container for the Whisker micromouse suite.
//!
//! A [`Maze`] is a square grid of generic cell payloads plus per-edge wall
//! state shared between adjacent cells: the edge between a cell and its
//! neighbour resolves to the same storage slot from either side. The
//! [`mask`] module serializes the wall state as an `S×S` grid of 4-bit
//! masks for snapshots and test fixtures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
pub mod mask;

pub use error::GridError;
pub use grid::{EdgeState, Maze, MAX_SIDE};
pub use mask::WallSnapshot;
