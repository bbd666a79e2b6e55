//! SDL2 host: window canvas renderer and device event translation.
//!
//! Only built with the `sdl` feature.

pub mod events;
pub mod sdl_renderer;

pub use sdl_renderer::{SdlRenderer, load_textures};
