//! Whisker: a micromouse maze-solving suite.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Whisker sub-crates. For most users, adding `whisker` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use whisker::prelude::*;
//! use whisker::sim::{generate, SimHardware};
//!
//! // An 8×8 world carved from seed 400, entered at the bottom-left.
//! let config = NavConfig {
//!     side: 8,
//!     start: Coord::new(0, 7),
//!     heading: Dir4::Up,
//! };
//! let world = generate(config.side, 400).unwrap();
//! let body = SimHardware::new(world, config.start, config.heading);
//!
//! let mut mouse = Mouse::new(config, Box::new(body)).unwrap();
//! for _ in 0..10_000 {
//!     if mouse.state() == NavState::Stopped {
//!         break;
//!     }
//!     mouse.advance().unwrap();
//! }
//! assert_eq!(mouse.state(), NavState::Stopped);
//! assert!(mouse.goal().contains(mouse.position()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `whisker-core` | Direction algebra, coordinates, the `Hardware` trait |
//! | [`maze`] | `whisker-maze` | The generic wall-grid container and mask codec |
//! | [`nav`] | `whisker-nav` | The mouse state machine and policies |
//! | [`sim`] | `whisker-sim` | Simulated hardware, maze generation, scenarios |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Direction algebra, coordinates, and the hardware capability trait
/// (`whisker-core`).
pub use whisker_core as types;

/// The wall-grid maze container and 4-bit mask codec (`whisker-maze`).
pub use whisker_maze as maze;

/// The mouse state machine, exploration, and rush replay (`whisker-nav`).
pub use whisker_nav as nav;

/// Simulated hardware, seeded maze generation, and preset scenarios
/// (`whisker-sim`).
pub use whisker_sim as sim;

/// Common imports for typical Whisker usage.
///
/// ```rust
/// use whisker::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use whisker_core::{Coord, Dir4, DirectionError, Hardware, Rel4};

    // Maze container
    pub use whisker_maze::{EdgeState, GridError, Maze, WallSnapshot};

    // Navigation
    pub use whisker_nav::{
        Advance, ConfigError, Mouse, NavConfig, NavError, NavMetrics, NavState,
    };
}
