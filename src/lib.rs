//! Pixel Outpost: a 2D pixel-art economy game.
//!
//! The core is three coordinate spaces ([`coords`]) and a UI input arbitrator
//! ([`ui`]) that decides which of several overlapping elements owns the
//! pointer each tick. Everything else builds the game on top of those two.

pub mod assets;
pub mod collision;
pub mod config;
pub mod coords;
pub mod error;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod render;
pub mod text;
pub mod ui;

#[cfg(feature = "sdl")]
pub mod platform;
