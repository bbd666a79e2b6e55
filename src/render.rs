//! Renderer Seam
//!
//! The core never draws by itself. It computes screen-space coordinates via
//! [`ResolutionContext`] and hands them to a [`Renderer`], which the host
//! implements (SDL2 canvas in `platform`, a recorder in tests).
//!
//! # Handles
//!
//! - [`ImageHandle`]: a loaded image, sized in *logical pixels*
//! - [`TextHandle`]: a pre-laid-out string from a [`FontRenderer`], also in
//!   logical pixels
//!
//! Renderers scale both by the pixel size, so an image `w` pixels wide covers
//! `w * pixel_size` device pixels.

use crate::collision::{PixelRect, ScreenRect};
use crate::coords::{PixelVec, ResolutionContext, ScreenVec};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Rgba::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
}

/// A loaded image, sized in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn size(&self) -> PixelVec {
        PixelVec::new(self.width as i32, self.height as i32)
    }
}

/// Where a string's glyphs sit relative to the handle's top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub baseline: Baseline,
    /// Wrap width in logical pixels, 0 disables wrapping
    pub word_wrap: u32,
}

/// Pre-laid-out text, sized in logical pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHandle {
    lines: Vec<String>,
    width: u32,
    height: u32,
    line_height: u32,
    baseline_shift: i32,
}

impl TextHandle {
    pub fn new(lines: Vec<String>, width: u32, line_height: u32, baseline_shift: i32) -> Self {
        let height = line_height * lines.len().max(1) as u32;
        TextHandle {
            lines,
            width,
            height,
            line_height,
            baseline_shift,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn baseline_shift(&self) -> i32 {
        self.baseline_shift
    }

    pub fn size(&self) -> PixelVec {
        PixelVec::new(self.width as i32, self.height as i32)
    }
}

/// Font/text-layout collaborator
pub trait FontRenderer {
    fn create_static_string(&self, text: &str, options: TextOptions) -> TextHandle;
}

/// Drawing collaborator. All positions are in screen space.
pub trait Renderer {
    fn clear(&mut self) -> Result<(), String>;

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String>;

    fn draw_outline(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String>;

    /// Draws `image` with its top-left corner at `position`, snapped to the
    /// pixel grid (see [`image_destination`]).
    fn draw_image(&mut self, image: &ImageHandle, position: ScreenVec) -> Result<(), String>;

    fn draw_text(&mut self, text: &TextHandle, position: ScreenVec) -> Result<(), String>;

    /// Fills a rectangle given in logical pixels
    fn fill_pixel_rect(
        &mut self,
        ctx: &ResolutionContext,
        rect: PixelRect,
        color: Rgba,
    ) -> Result<(), String> {
        let origin = ctx.pixel_to_screen(PixelVec::new(rect.x, rect.y));
        let size = ctx.pixel_to_screen(PixelVec::new(rect.width, rect.height));
        self.fill_rect(ScreenRect::from_origin_size(origin, size), color)
    }
}

/// Screen rectangle an image of `size` logical pixels covers when drawn at
/// `position`. The position snaps to the nearest pixel cell first.
pub fn image_destination(ctx: &ResolutionContext, size: PixelVec, position: ScreenVec) -> ScreenRect {
    let origin = ctx.pixel_to_screen(ctx.screen_to_pixel(position));
    ScreenRect::from_origin_size(origin, ctx.pixel_to_screen(size))
}

/// Top-left screen position that centers a `size`-pixel drawable in `rect`
pub fn centered_in(ctx: &ResolutionContext, rect: &ScreenRect, size: PixelVec) -> ScreenVec {
    let dimension = ctx.pixel_to_screen(size);
    ScreenVec::new(
        rect.x + rect.width / 2.0 - dimension.x / 2.0,
        rect.y + rect.height / 2.0 - dimension.y / 2.0,
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Fill(ScreenRect, Rgba),
        Outline(ScreenRect, Rgba),
        Image(usize, ScreenVec),
        Text(Vec<String>, ScreenVec),
    }

    /// Renderer that records every call instead of drawing
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn images(&self) -> Vec<(usize, ScreenVec)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Image(id, pos) => Some((*id, *pos)),
                    _ => None,
                })
                .collect()
        }

        pub fn fills(&self) -> Vec<(ScreenRect, Rgba)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Fill(rect, color) => Some((*rect, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text(lines, _) => Some(lines.join("\n")),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) -> Result<(), String> {
            self.calls.push(DrawCall::Clear);
            Ok(())
        }

        fn fill_rect(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String> {
            self.calls.push(DrawCall::Fill(rect, color));
            Ok(())
        }

        fn draw_outline(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String> {
            self.calls.push(DrawCall::Outline(rect, color));
            Ok(())
        }

        fn draw_image(&mut self, image: &ImageHandle, position: ScreenVec) -> Result<(), String> {
            self.calls.push(DrawCall::Image(image.id, position));
            Ok(())
        }

        fn draw_text(&mut self, text: &TextHandle, position: ScreenVec) -> Result<(), String> {
            self.calls.push(DrawCall::Text(text.lines().to_vec(), position));
            Ok(())
        }
    }

    /// Monospace stand-in font: every char is 4 pixels wide, lines are 6 high
    #[derive(Debug, Default)]
    pub struct FixedFont;

    impl FontRenderer for FixedFont {
        fn create_static_string(&self, text: &str, _options: TextOptions) -> TextHandle {
            TextHandle::new(vec![text.to_string()], text.chars().count() as u32 * 4, 6, 0)
        }
    }
}
