// Game module - Top-level context and tick driver
//
// This module contains:
// - mod.rs: Game, which owns the resolution, input, arbitrator and world
// - world.rs: MainWorld with modules, placement and camera panning
// - module.rs: a placed module and its image button
// - camera.rs: drag-to-pan camera
// - types.rs: shared enums and helper structs
// - ui_manager.rs: world UI (button bar, stats, module menu)

pub mod camera;
pub mod module;
pub mod types;
pub mod ui_manager;
pub mod world;

pub use types::*;
pub use world::MainWorld;

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::coords::ResolutionContext;
use crate::error::GameError;
use crate::input_system::{InputEvent, InputManager};
use crate::render::Renderer;
use crate::text::BitmapFont;
use crate::ui::{ActiveUiArbitrator, UiContext};
use camera::Camera;

/// Owns every piece of shared state and drives the tick.
///
/// # Tick
///
/// 1. world update (UI elements, menus, modules, camera)
/// 2. clear and render
/// 3. `InputManager::advance_tick`
///
/// A click-handler or render failure is reported only after all three steps
/// ran, so input edges are never seen by two ticks.
pub struct Game {
    resolution: ResolutionContext,
    input: InputManager,
    arbiter: ActiveUiArbitrator,
    font: BitmapFont,
    world: MainWorld,
}

impl Game {
    pub fn new(config: &GameConfig, assets: GameAssets) -> Result<Self, GameError> {
        let resolution = ResolutionContext::new(config.resolution, config.canvas_width, config.canvas_height)?;
        let input = InputManager::new();
        let mut arbiter = ActiveUiArbitrator::new();
        let font = BitmapFont::new();
        let camera = Camera::new(config.camera_bounds, config.pan_divisor);

        let world = {
            let mut ctx = UiContext {
                resolution: &resolution,
                input: &input,
                arbiter: &mut arbiter,
                font: &font,
            };
            MainWorld::new(&mut ctx, assets, camera)
        };

        log::info!(
            "Game ready: {}x{} logical pixels on a {}x{} canvas",
            resolution.logical_resolution(),
            resolution.logical_resolution(),
            resolution.canvas_width(),
            resolution.canvas_height()
        );

        Ok(Game {
            resolution,
            input,
            arbiter,
            font,
            world,
        })
    }

    /// Records a device event for the next tick
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        let updated = {
            let mut ctx = UiContext {
                resolution: &self.resolution,
                input: &self.input,
                arbiter: &mut self.arbiter,
                font: &self.font,
            };
            self.world.update(&mut ctx)
        };

        let rendered = match renderer.clear() {
            Ok(()) => self.world.render(renderer, &self.resolution, &self.input),
            Err(e) => Err(e),
        };

        self.input.advance_tick();

        rendered.map_err(GameError::Render)?;
        updated?;
        Ok(())
    }

    pub fn resolution(&self) -> &ResolutionContext {
        &self.resolution
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    pub fn arbiter(&self) -> &ActiveUiArbitrator {
        &self.arbiter
    }

    pub fn world(&self) -> &MainWorld {
        &self.world
    }
}
