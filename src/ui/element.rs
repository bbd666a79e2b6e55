//! Base positioned rectangle shared by every UI widget.

use super::UiContext;
use super::arbiter::{ActiveUiArbitrator, ElementId};
use crate::collision::ScreenRect;
use crate::coords::{PixelVec, RatioVec, ResolutionContext, ScreenVec};
use crate::input_system::InputManager;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Every recognized construction option.
///
/// `layer`: smaller values win input arbitration and are meant to be drawn on
/// top. `text` is used by buttons and text widgets, `word_wrap` (logical
/// pixels, 0 = off) by text widgets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    pub halign: HAlign,
    pub valign: VAlign,
    pub layer: i32,
    pub text: String,
    pub word_wrap: u32,
}

impl UiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }

    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn word_wrap(mut self, word_wrap: u32) -> Self {
        self.word_wrap = word_wrap;
        self
    }
}

/// A rectangle laid out in ratio space.
///
/// The screen rectangle is re-derived whenever position or size change:
/// the anchor and size are quantized through `ratio_to_screen`, then the
/// alignment offsets the box around the anchor.
#[derive(Debug, Clone)]
pub struct UiElement {
    id: ElementId,
    options: UiOptions,
    ratio_pos: RatioVec,
    ratio_size: RatioVec,
    rect: ScreenRect,
    alive: bool,
    ui_active: bool,
}

impl UiElement {
    pub fn new(ctx: &mut UiContext, pos: RatioVec, size: RatioVec, options: UiOptions) -> Self {
        let mut element = UiElement {
            id: ctx.arbiter.allocate_id(),
            options,
            ratio_pos: pos,
            ratio_size: size,
            rect: ScreenRect::default(),
            alive: true,
            ui_active: false,
        };
        element.relayout(ctx.resolution);
        element
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn options(&self) -> &UiOptions {
        &self.options
    }

    pub fn layer(&self) -> i32 {
        self.options.layer
    }

    /// Changes the layer, keeping a live claim in sync
    pub fn set_layer(&mut self, layer: i32, arbiter: &mut ActiveUiArbitrator) {
        self.options.layer = layer;
        if self.ui_active {
            arbiter.update_layer(self.id, layer);
        }
    }

    /// Moves the anchor point (ratio space)
    pub fn set_pos(&mut self, res: &ResolutionContext, pos: RatioVec) {
        self.ratio_pos = pos;
        self.relayout(res);
    }

    /// Resizes (ratio space)
    pub fn set_dimensions(&mut self, res: &ResolutionContext, size: RatioVec) {
        self.ratio_size = size;
        self.relayout(res);
    }

    /// Resizes to cover `size` logical pixels (pixel -> screen -> ratio)
    pub fn set_dimensions_from_pixels(&mut self, res: &ResolutionContext, size: PixelVec) {
        let screen = res.pixel_to_screen(size);
        self.set_dimensions(res, res.screen_to_ratio(screen));
    }

    fn relayout(&mut self, res: &ResolutionContext) {
        let anchor = res.ratio_to_screen(self.ratio_pos);
        let size = res.ratio_to_screen(self.ratio_size);

        let x = match self.options.halign {
            HAlign::Left => anchor.x,
            HAlign::Center => anchor.x - size.x / 2.0,
            HAlign::Right => anchor.x - size.x,
        };
        let y = match self.options.valign {
            VAlign::Top => anchor.y,
            VAlign::Center => anchor.y - size.y / 2.0,
            VAlign::Bottom => anchor.y - size.y,
        };

        self.rect = ScreenRect::from_origin_size(ScreenVec::new(x, y), size);
    }

    pub fn ratio_pos(&self) -> RatioVec {
        self.ratio_pos
    }

    pub fn ratio_size(&self) -> RatioVec {
        self.ratio_size
    }

    /// Anchor x plus width, in ratio space. Handy for laying out a neighbour.
    pub fn right(&self) -> f64 {
        self.ratio_pos.x + self.ratio_size.x
    }

    /// Anchor y plus height, in ratio space
    pub fn bottom(&self) -> f64 {
        self.ratio_pos.y + self.ratio_size.y
    }

    pub fn screen_rect(&self) -> ScreenRect {
        self.rect
    }

    pub fn is_mouse_hovering(&self, input: &InputManager) -> bool {
        input.mouse.is_colliding_rect(&self.rect)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True while this element holds a claim with the arbitrator
    pub fn is_ui_active(&self) -> bool {
        self.ui_active
    }

    pub fn is_authoritative(&self, arbiter: &ActiveUiArbitrator) -> bool {
        arbiter.is_authoritative(self.id)
    }

    /// Claims input. Dead elements never claim.
    pub fn activate_ui(&mut self, arbiter: &mut ActiveUiArbitrator) {
        if !self.alive {
            return;
        }
        if !self.ui_active {
            arbiter.claim(self.id, self.options.layer);
            self.ui_active = true;
        }
    }

    /// Drops the claim if held. Returns true if one was dropped.
    pub fn deactivate_ui(&mut self, arbiter: &mut ActiveUiArbitrator) -> bool {
        if !self.ui_active {
            return false;
        }
        arbiter.release(self.id);
        self.ui_active = false;
        true
    }

    /// Releases any claim and disables update/render until [`revive`](Self::revive).
    /// Killing a dead element is a no-op.
    pub fn kill(&mut self, arbiter: &mut ActiveUiArbitrator) {
        self.deactivate_ui(arbiter);
        self.alive = false;
    }

    pub fn revive(&mut self) {
        self.alive = true;
    }
}
