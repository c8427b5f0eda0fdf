#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Robot-Monster Grid
//!
//! The fixed 5×5 world the robot moves through.
//!
//! This crate is the leaf of the workspace. It knows nothing about rewards or
//! episodes; it only answers where the robot ends up after an action.
//!
//! ## Key Components
//!
//! -   **Cells:** [`Cell`] is a validated index in `[0, 25)`. Rows and columns
//!     follow `row = index / 5`, `column = index % 5`.
//! -   **Actions:** [`Action`] enumerates the four moves. Each carries one
//!     canonical offset that is used both to compute the target and to check
//!     its legality.
//! -   **Topology:** [`Adjacency`] holds the hand-authored neighbor table,
//!     including the walls baked into the bottom rows.
//! -   **Movement:** [`transition`] applies an action. Moving into a wall is a
//!     no-op, not an error.
//!
//! ```rust
//! use grid::{Action, Adjacency, Cell};
//!
//! let table = Adjacency::standard();
//! let start = Cell::new(11).unwrap();
//! assert_eq!(grid::transition(&table, start, Action::East), Cell::new(12).unwrap());
//! ```

pub mod action;
pub mod adjacency;
pub mod cell;
pub mod error;
pub mod transition;

pub use action::Action;
pub use adjacency::Adjacency;
pub use cell::{Cell, GRID_SIZE, GRID_WIDTH};
pub use error::GridError;
pub use transition::{legal_actions, transition, transition_raw};
