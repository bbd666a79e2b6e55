// A placed module and its world-level image button

use crate::collision::{Collidable, PixelRect};
use crate::coords::{PixelVec, ResolutionContext};
use crate::render::{ImageHandle, Renderer, Rgba};
use crate::ui::{ClickError, HAlign, UiContext, UiOptions, VAlign, Widget};

use super::types::{ModuleHighlight, ModuleKind};

pub const BLOCKED_TINT: Rgba = Rgba::rgba(255, 0, 0, 127);
pub const SELECTED_OUTLINE: Rgba = Rgba::rgba(127, 127, 0, 127);

/// A module occupying a footprint on the world grid.
///
/// `pos` is in world pixels; the button sits at `pos - camera` on screen.
#[derive(Debug)]
pub struct Module {
    kind: ModuleKind,
    pos: PixelVec,
    size: PixelVec,
    button: Widget,
}

impl Module {
    pub fn new(ctx: &mut UiContext, kind: ModuleKind, pos: PixelVec, image: ImageHandle, camera: PixelVec) -> Self {
        let ratio = ctx.resolution.pixel_to_ratio(pos - camera);
        let button = Widget::image_button(
            ctx,
            ratio,
            image,
            UiOptions::new().align(HAlign::Left, VAlign::Top),
        );

        Module {
            kind,
            pos,
            size: image.size(),
            button,
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn pos(&self) -> PixelVec {
        self.pos
    }

    pub fn size(&self) -> PixelVec {
        self.size
    }

    pub fn button(&self) -> &Widget {
        &self.button
    }

    pub fn set_pos(&mut self, res: &ResolutionContext, pos: PixelVec, camera: PixelVec) {
        self.pos = pos;
        self.on_camera_change(res, camera);
    }

    /// Moves the on-screen button to follow the camera
    pub fn on_camera_change(&mut self, res: &ResolutionContext, camera: PixelVec) {
        let ratio = res.pixel_to_ratio(self.pos - camera);
        self.button.element_mut().set_pos(res, ratio);
    }

    /// Returns `Ok(true)` when the module was clicked
    pub fn update(&mut self, ctx: &mut UiContext) -> Result<bool, ClickError> {
        self.button.update(ctx)
    }

    pub fn render(
        &self,
        renderer: &mut dyn Renderer,
        res: &ResolutionContext,
        highlight: ModuleHighlight,
    ) -> Result<(), String> {
        self.button.render(renderer, res)?;

        let rect = self.button.element().screen_rect();
        match highlight {
            ModuleHighlight::None => Ok(()),
            ModuleHighlight::Blocked => renderer.fill_rect(rect, BLOCKED_TINT),
            ModuleHighlight::Selected => renderer.draw_outline(rect, SELECTED_OUTLINE),
        }
    }
}

impl Collidable for Module {
    fn pixel_bounds(&self) -> PixelRect {
        PixelRect::from_origin_size(self.pos, self.size)
    }
}
