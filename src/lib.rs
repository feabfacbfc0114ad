//! Sliding penguins on a 10x10 icy terrain: a slide engine, a collision
//! resolver and species abilities, driven by a console turn loop.

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod occupant;
pub mod physics;
pub mod render;
pub mod setup;
pub mod terrain;
pub mod types;

pub use error::GameError;
pub use game::Game;
pub use terrain::Terrain;
