//! Seeded rooms-and-corridors layout generation.
//!
//! [`generators::generate_maze`] validates a [`MazeConfig`], places rooms, joins
//! them with the selected [`generators::ConnectivityStrategy`] and prunes hallway
//! dead ends. The resulting [`maze::Maze`] can be written out with [`render`]
//! and [`graph`].

pub mod config;
pub mod error;
pub mod generators;
pub mod graph;
pub mod maze;
pub mod render;

pub use config::MazeConfig;
pub use error::{ConfigError, Error};
pub use generators::{Generator, generate_maze};
pub use maze::{Grid, Maze, Room, Tile};
