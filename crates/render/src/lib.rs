#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Maze rendering for the robot-monster board.
//!
//! The renderer rasterizes the board into a fixed 17×17 grid of `f32`
//! values. The static part (border, walls, prizes, monster) is drawn once
//! when the [`MazeRenderer`] is built; each call to [`MazeRenderer::render`]
//! copies it and stamps the robot on top.
//!
//! Frames can be dumped as ASCII for logs or written to PNG through the
//! `image` crate.

pub mod error;
pub mod frame;
pub mod maze;

pub use error::RenderError;
pub use frame::{Frame, FRAME_SIZE};
pub use maze::{MazeRenderer, RenderMode};
