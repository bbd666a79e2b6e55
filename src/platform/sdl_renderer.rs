//! SDL2 implementation of the drawing seam
//!
//! All positions arrive in screen space. Images are scaled by the pixel size
//! and snapped onto the grid via [`image_destination`]; text is drawn cell by
//! cell from the procedural bitmap font.

use crate::assets::{ImageAsset, LoadedImage};
use crate::collision::ScreenRect;
use crate::coords::{ResolutionContext, ScreenVec};
use crate::render::{ImageHandle, Renderer, Rgba, TextHandle, image_destination};
use crate::text::lit_cells;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

/// Drawn where a texture failed to load
const MISSING_TEXTURE: Rgba = Rgba::rgb(255, 0, 255);
const TEXT_COLOR: Rgba = Rgba::WHITE;

/// Turns loaded image bytes into textures.
///
/// Handle ids index the returned texture list. Images that failed to read or
/// decode get a `None` texture and a handle at their fallback size.
pub fn load_textures<'t>(
    texture_creator: &'t TextureCreator<WindowContext>,
    images: Vec<LoadedImage>,
) -> (Vec<Option<Texture<'t>>>, HashMap<ImageAsset, ImageHandle>) {
    let mut textures = Vec::with_capacity(images.len());
    let mut handles = HashMap::new();

    for (id, image) in images.into_iter().enumerate() {
        let texture = image.bytes.as_deref().and_then(|bytes| {
            texture_creator
                .load_texture_bytes(bytes)
                .map_err(|e| log::warn!("Failed to decode {}: {}", image.path.display(), e))
                .ok()
        });

        let (width, height) = match &texture {
            Some(texture) => {
                let query = texture.query();
                (query.width, query.height)
            }
            None => image.asset.fallback_size(),
        };

        handles.insert(image.asset, ImageHandle { id, width, height });
        textures.push(texture);
    }

    (textures, handles)
}

fn to_sdl_color(color: Rgba) -> Color {
    Color::RGBA(color.r, color.g, color.b, color.a)
}

fn to_sdl_rect(rect: ScreenRect) -> Rect {
    Rect::new(
        rect.x.round() as i32,
        rect.y.round() as i32,
        rect.width.round().max(0.0) as u32,
        rect.height.round().max(0.0) as u32,
    )
}

pub struct SdlRenderer<'t> {
    canvas: Canvas<Window>,
    textures: Vec<Option<Texture<'t>>>,
    resolution: ResolutionContext,
}

impl<'t> SdlRenderer<'t> {
    pub fn new(mut canvas: Canvas<Window>, textures: Vec<Option<Texture<'t>>>, resolution: ResolutionContext) -> Self {
        canvas.set_blend_mode(BlendMode::Blend);
        SdlRenderer {
            canvas,
            textures,
            resolution,
        }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl Renderer for SdlRenderer<'_> {
    fn clear(&mut self) -> Result<(), String> {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.fill_rect(to_sdl_rect(rect))
    }

    fn draw_outline(&mut self, rect: ScreenRect, color: Rgba) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.draw_rect(to_sdl_rect(rect))
    }

    fn draw_image(&mut self, image: &ImageHandle, position: ScreenVec) -> Result<(), String> {
        let dest = image_destination(&self.resolution, image.size(), position);
        match self.textures.get(image.id).and_then(Option::as_ref) {
            Some(texture) => self.canvas.copy(texture, None, to_sdl_rect(dest)),
            None => {
                self.canvas.set_draw_color(to_sdl_color(MISSING_TEXTURE));
                self.canvas.fill_rect(to_sdl_rect(dest))
            }
        }
    }

    fn draw_text(&mut self, text: &TextHandle, position: ScreenVec) -> Result<(), String> {
        let origin = self.resolution.round_screen(position);
        let cell = self.resolution.pixel_size();

        self.canvas.set_draw_color(to_sdl_color(TEXT_COLOR));
        for lit in lit_cells(text) {
            let offset = self.resolution.pixel_to_screen(lit);
            let rect = ScreenRect::from_origin_size(origin + offset, ScreenVec::new(cell, cell));
            self.canvas.fill_rect(to_sdl_rect(rect))?;
        }
        Ok(())
    }
}
