//! Widgets: a [`UiElement`] composed with a [`Behavior`] and a [`Content`].
//!
//! | Constructor      | Behavior                 | Content                  |
//! |------------------|--------------------------|--------------------------|
//! | `panel`          | claims while hovered     | translucent fill         |
//! | `button`         | arbitrated [`Clickable`] | status fill + label/icon |
//! | `image`          | none                     | image                    |
//! | `text`           | none                     | text                     |
//! | `image_button`   | idle-gated [`Clickable`] | image                    |
//!
//! Image and text widgets take their size from the handle (pixel -> screen
//! -> ratio), so the `size` of their options is never needed.

use super::UiContext;
use super::arbiter::{ActiveUiArbitrator, ElementId};
use super::clickable::{ClickError, ClickGate, ClickHandler, ClickStatus, Clickable};
use super::element::{UiElement, UiOptions};
use crate::coords::{RatioVec, ResolutionContext};
use crate::render::{self, Baseline, FontRenderer, ImageHandle, Renderer, Rgba, TextHandle, TextOptions};

pub const PANEL_FILL: Rgba = Rgba::rgba(50, 100, 150, 217);

/// Fill color per click status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub up: Rgba,
    pub hover: Rgba,
    pub down: Rgba,
    pub up_active: Rgba,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        ButtonPalette {
            up: Rgba::from_hex(0xAAAAAA),
            hover: Rgba::from_hex(0xCCCCCC),
            down: Rgba::from_hex(0x505050),
            up_active: Rgba::from_hex(0xAAAAAA),
        }
    }
}

impl ButtonPalette {
    pub fn color(&self, status: ClickStatus) -> Rgba {
        match status {
            ClickStatus::Up => self.up,
            ClickStatus::Hover => self.hover,
            ClickStatus::Down => self.down,
            ClickStatus::UpActive => self.up_active,
        }
    }
}

#[derive(Debug)]
pub enum Behavior {
    Inert,
    /// Claims input while the pointer is over the element
    Hover,
    Click(Clickable),
}

/// Face of a button: at most one of label and icon is set
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonFace {
    pub label: Option<TextHandle>,
    pub icon: Option<ImageHandle>,
    pub palette: ButtonPalette,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Blank,
    Fill(Rgba),
    Image(ImageHandle),
    Text(TextHandle),
    Button(ButtonFace),
}

#[derive(Debug)]
pub struct Widget {
    element: UiElement,
    behavior: Behavior,
    content: Content,
}

impl Widget {
    pub fn new(element: UiElement, behavior: Behavior, content: Content) -> Self {
        Widget {
            element,
            behavior,
            content,
        }
    }

    pub fn panel(ctx: &mut UiContext, pos: RatioVec, size: RatioVec, options: UiOptions) -> Self {
        let element = UiElement::new(ctx, pos, size, options);
        Widget::new(element, Behavior::Hover, Content::Fill(PANEL_FILL))
    }

    /// Button labelled with `options.text` (no label when empty)
    pub fn button(ctx: &mut UiContext, pos: RatioVec, size: RatioVec, options: UiOptions) -> Self {
        let label = if options.text.is_empty() {
            None
        } else {
            Some(button_label(ctx.font, &options.text))
        };
        let element = UiElement::new(ctx, pos, size, options);
        Widget::new(
            element,
            Behavior::Click(Clickable::new(ClickGate::Arbitrated)),
            Content::Button(ButtonFace {
                label,
                icon: None,
                palette: ButtonPalette::default(),
            }),
        )
    }

    pub fn image(ctx: &mut UiContext, pos: RatioVec, image: ImageHandle, options: UiOptions) -> Self {
        let element = sized_element(ctx, pos, options, &image);
        Widget::new(element, Behavior::Inert, Content::Image(image))
    }

    /// Text widget showing `options.text`, wrapped at `options.word_wrap`
    pub fn text(ctx: &mut UiContext, pos: RatioVec, options: UiOptions) -> Self {
        let handle = ctx.font.create_static_string(
            &options.text,
            TextOptions {
                baseline: Baseline::Top,
                word_wrap: options.word_wrap,
            },
        );
        let mut element = UiElement::new(ctx, pos, RatioVec::default(), options);
        element.set_dimensions_from_pixels(ctx.resolution, handle.size());
        Widget::new(element, Behavior::Inert, Content::Text(handle))
    }

    /// World-level clickable image. It never claims input and only reacts
    /// while no UI element is authoritative.
    pub fn image_button(ctx: &mut UiContext, pos: RatioVec, image: ImageHandle, options: UiOptions) -> Self {
        let element = sized_element(ctx, pos, options, &image);
        Widget::new(
            element,
            Behavior::Click(Clickable::new(ClickGate::WhenUiIdle)),
            Content::Image(image),
        )
    }

    pub fn with_on_click(mut self, handler: ClickHandler) -> Self {
        if let Behavior::Click(clickable) = &mut self.behavior {
            clickable.set_handler(handler);
        }
        self
    }

    pub fn id(&self) -> ElementId {
        self.element.id()
    }

    pub fn element(&self) -> &UiElement {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut UiElement {
        &mut self.element
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Click status, for clickable widgets
    pub fn status(&self) -> Option<ClickStatus> {
        match &self.behavior {
            Behavior::Click(clickable) => Some(clickable.status()),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.element.is_alive()
    }

    /// Replaces a button's face with a label, or a text widget's string.
    /// Text widgets are resized to the new handle.
    pub fn set_text(&mut self, res: &ResolutionContext, font: &dyn FontRenderer, text: &str) {
        match &mut self.content {
            Content::Button(face) => {
                face.label = Some(button_label(font, text));
                face.icon = None;
            }
            Content::Text(handle) => {
                *handle = font.create_static_string(
                    text,
                    TextOptions {
                        baseline: Baseline::Top,
                        word_wrap: self.element.options().word_wrap,
                    },
                );
                let size = handle.size();
                self.element.set_dimensions_from_pixels(res, size);
            }
            _ => log::warn!("set_text on {:?}, which shows no text", self.element.id()),
        }
    }

    /// Replaces a button's face with a centered icon
    pub fn set_icon(&mut self, icon: ImageHandle) {
        match &mut self.content {
            Content::Button(face) => {
                face.icon = Some(icon);
                face.label = None;
            }
            _ => log::warn!("set_icon on {:?}, which is not a button", self.element.id()),
        }
    }

    /// Swaps the image of an image widget, resizing to it
    pub fn set_image(&mut self, res: &ResolutionContext, image: ImageHandle) {
        match &mut self.content {
            Content::Image(current) => {
                *current = image;
                self.element.set_dimensions_from_pixels(res, image.size());
            }
            _ => log::warn!("set_image on {:?}, which shows no image", self.element.id()),
        }
    }

    /// Runs one tick of the widget's behavior. Returns `Ok(true)` on click.
    pub fn update(&mut self, ctx: &mut UiContext) -> Result<bool, ClickError> {
        if !self.element.is_alive() {
            return Ok(false);
        }

        match &mut self.behavior {
            Behavior::Inert => Ok(false),
            Behavior::Hover => {
                if self.element.is_mouse_hovering(ctx.input) {
                    self.element.activate_ui(ctx.arbiter);
                } else {
                    self.element.deactivate_ui(ctx.arbiter);
                }
                Ok(false)
            }
            Behavior::Click(clickable) => clickable.update(&mut self.element, ctx),
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer, res: &ResolutionContext) -> Result<(), String> {
        if !self.element.is_alive() {
            return Ok(());
        }

        let rect = self.element.screen_rect();
        match &self.content {
            Content::Blank => Ok(()),
            Content::Fill(color) => renderer.fill_rect(rect, *color),
            Content::Image(image) => renderer.draw_image(image, rect.origin()),
            Content::Text(text) => renderer.draw_text(text, rect.origin()),
            Content::Button(face) => {
                let status = self.status().unwrap_or_default();
                renderer.fill_rect(rect, face.palette.color(status))?;
                if let Some(label) = &face.label {
                    renderer.draw_text(label, render::centered_in(res, &rect, label.size()))?;
                }
                if let Some(icon) = &face.icon {
                    renderer.draw_image(icon, render::centered_in(res, &rect, icon.size()))?;
                }
                Ok(())
            }
        }
    }

    /// Drops any claim without killing the widget
    pub fn deactivate_ui(&mut self, arbiter: &mut ActiveUiArbitrator) {
        self.element.deactivate_ui(arbiter);
    }

    pub fn kill(&mut self, arbiter: &mut ActiveUiArbitrator) {
        self.element.kill(arbiter);
    }

    /// Brings the widget back; clickables restart in `Up`
    pub fn revive(&mut self) {
        match &mut self.behavior {
            Behavior::Click(clickable) => clickable.revive(&mut self.element),
            _ => self.element.revive(),
        }
    }
}

fn button_label(font: &dyn FontRenderer, text: &str) -> TextHandle {
    font.create_static_string(
        text,
        TextOptions {
            baseline: Baseline::Bottom,
            word_wrap: 0,
        },
    )
}

fn sized_element(ctx: &mut UiContext, pos: RatioVec, options: UiOptions, image: &ImageHandle) -> UiElement {
    let mut element = UiElement::new(ctx, pos, RatioVec::default(), options);
    element.set_dimensions_from_pixels(ctx.resolution, image.size());
    element
}
