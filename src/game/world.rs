// MainWorld struct and module management
//
// This module contains MainWorld, which owns the placed modules, the camera,
// the world UI and the economy counters. It consumes the UI toolkit: every
// button press, menu action and camera drag goes through the same
// arbitration as the rest of the UI.

use crate::assets::GameAssets;
use crate::collision::{PixelRect, ScreenRect, overlaps_any};
use crate::coords::{PixelVec, ResolutionContext, ScreenVec};
use crate::gui::MenuAction;
use crate::input_system::{InputManager, keys, mouse_buttons};
use crate::render::{ImageHandle, Renderer, Rgba};
use crate::ui::{ClickError, UiContext};

use super::camera::Camera;
use super::module::Module;
use super::types::{ModuleHighlight, ModuleKind, Resources};
use super::ui_manager::UiManager;

pub const BACKGROUND: Rgba = Rgba::from_hex(0x1B3A50);

/// Modules present at the start of a game: kind and world pixel position
const STARTING_MODULES: [(ModuleKind, PixelVec); 3] = [
    (ModuleKind::Develop, PixelVec::new(5, 5)),
    (ModuleKind::Research, PixelVec::new(32, 5)),
    (ModuleKind::Research, PixelVec::new(5, 20)),
];

/// A module following the pointer, waiting to be dropped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: ModuleKind,
    pub image: ImageHandle,
    /// Top-left corner of the ghost on screen
    pub screen_pos: ScreenVec,
}

/// MainWorld encapsulates the modules, camera and world UI
#[derive(Debug)]
pub struct MainWorld {
    ui: UiManager,
    modules: Vec<Module>,
    camera: Camera,
    placement: Option<Placement>,
    active_module: Option<usize>,
    resources: Resources,
    assets: GameAssets,
}

/// Returns the value, or records the error (first one wins) and yields a default
fn keep_first<T: Default>(result: Result<T, ClickError>, first_error: &mut Option<ClickError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{}", err);
            if first_error.is_none() {
                *first_error = Some(err);
            }
            T::default()
        }
    }
}

impl MainWorld {
    pub fn new(ctx: &mut UiContext, assets: GameAssets, camera: Camera) -> Self {
        let resources = Resources::default();
        let ui = UiManager::new(ctx, &assets, &resources);

        let modules = STARTING_MODULES
            .iter()
            .map(|(kind, pos)| Module::new(ctx, *kind, *pos, kind.image(&assets), camera.position()))
            .collect();

        MainWorld {
            ui,
            modules,
            camera,
            placement: None,
            active_module: None,
            resources,
            assets,
        }
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ui(&self) -> &UiManager {
        &self.ui
    }

    pub fn active_module(&self) -> Option<&Module> {
        self.active_module.and_then(|index| self.modules.get(index))
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Runs one tick of world logic.
    ///
    /// Every part of the world updates even if a click handler fails along
    /// the way; the first failure is returned at the end.
    pub fn update(&mut self, ctx: &mut UiContext) -> Result<(), ClickError> {
        let mut first_error = None;

        let clicked = keep_first(self.ui.buttons.update(ctx), &mut first_error);
        if clicked.contains(&self.ui.action_button) {
            self.open_active_menu(ctx);
        }
        if clicked.contains(&self.ui.end_week_button) {
            self.end_week();
            self.ui.refresh_stats(ctx.resolution, ctx.font, &self.resources);
        }
        if clicked.contains(&self.ui.stats_button) {
            self.ui.toggle_stats();
            if self.ui.stats.is_active() {
                self.ui.refresh_stats(ctx.resolution, ctx.font, &self.resources);
            }
        }

        let action = match self.ui.module_menu.as_mut() {
            Some(menu) => keep_first(menu.update(ctx), &mut first_error),
            None => None,
        };
        if let Some(MenuAction::Buy(kind)) = action {
            self.ui.close_menu(ctx.arbiter);
            self.start_placement(kind);
        }
        if self.ui.is_menu_open() && keep_first(self.ui.close_menu_button.update(ctx), &mut first_error) {
            self.ui.close_menu(ctx.arbiter);
        }

        keep_first(self.ui.stats.update(ctx), &mut first_error);

        let mut selected = None;
        for (index, module) in self.modules.iter_mut().enumerate() {
            if keep_first(module.update(ctx), &mut first_error) {
                selected = Some(index);
            }
        }
        if let Some(index) = selected {
            self.select_module(index);
        }

        if ctx.input.key.is_pressed(keys::ENTER) {
            self.start_placement(ModuleKind::Develop);
        }
        self.update_placement(ctx);

        let ui_idle = !ctx.arbiter.has_authoritative();
        if self.camera.update(ctx.input, ui_idle) {
            let camera = self.camera.position();
            for module in self.modules.iter_mut() {
                module.on_camera_change(ctx.resolution, camera);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn open_active_menu(&mut self, ctx: &mut UiContext) {
        match self.active_module().map(Module::kind) {
            Some(kind) => self.ui.open_menu(ctx, kind, &self.assets),
            None => log::info!("No module selected"),
        }
    }

    fn end_week(&mut self) {
        log::info!("End of week {}", self.resources.week);
        self.resources.week += 1;
    }

    fn select_module(&mut self, index: usize) {
        let Some(module) = self.modules.get(index) else {
            return;
        };
        let kind = module.kind();
        log::info!("Selected {} module at {:?}", kind.name(), module.pos());
        self.active_module = Some(index);
        self.ui.set_action_icon(kind.action_icon(&self.assets));
    }

    fn start_placement(&mut self, kind: ModuleKind) {
        log::info!("Placing new {} module", kind.name());
        self.placement = Some(Placement {
            kind,
            image: kind.image(&self.assets),
            screen_pos: ScreenVec::default(),
        });
    }

    /// Moves the ghost under the pointer and drops it on a left press if its
    /// footprint is free and no UI element owns the pointer
    fn update_placement(&mut self, ctx: &mut UiContext) {
        let Some(placement) = self.placement.as_mut() else {
            return;
        };

        let size = ctx.resolution.pixel_to_screen(placement.image.size());
        placement.screen_pos = ctx.input.mouse.position() - ScreenVec::new(size.x / 2.0, size.y / 2.0);

        if !ctx.input.mouse.is_pressed(mouse_buttons::LEFT) || ctx.arbiter.has_authoritative() {
            return;
        }

        let camera = self.camera.position();
        let pos = ctx.resolution.screen_to_pixel(placement.screen_pos) + camera;
        let footprint = PixelRect::from_origin_size(pos, placement.image.size());
        if overlaps_any(&footprint, &self.modules) {
            log::debug!("Cannot place module at {:?}: occupied", pos);
            return;
        }

        let (kind, image) = (placement.kind, placement.image);
        self.modules.push(Module::new(ctx, kind, pos, image, camera));
        self.placement = None;
        log::info!("Placed {} module at {:?}", kind.name(), pos);
    }

    pub fn render(&self, renderer: &mut dyn Renderer, res: &ResolutionContext, input: &InputManager) -> Result<(), String> {
        let canvas = ScreenRect::new(0.0, 0.0, res.canvas_width() as f64, res.canvas_height() as f64);
        renderer.fill_rect(canvas, BACKGROUND)?;

        for (index, module) in self.modules.iter().enumerate() {
            let highlight = if self.placement.is_some() {
                ModuleHighlight::Blocked
            } else if self.active_module == Some(index) {
                ModuleHighlight::Selected
            } else {
                ModuleHighlight::None
            };
            module.render(renderer, res, highlight)?;
        }
        self.ui.buttons.render(renderer, res)?;

        let selector = self.assets.pixel_selector;
        let selector_size = res.pixel_to_screen(selector.size());
        let selector_pos = input.mouse.position() - ScreenVec::new(selector_size.x / 2.0, selector_size.y / 2.0);
        renderer.draw_image(&selector, selector_pos)?;

        if let Some(placement) = &self.placement {
            renderer.draw_image(&placement.image, placement.screen_pos)?;
        }

        self.ui.stats.render(renderer, res)?;
        if let Some(menu) = &self.ui.module_menu {
            menu.render(renderer, res)?;
            self.ui.close_menu_button.render(renderer, res)?;
        }
        Ok(())
    }
}
