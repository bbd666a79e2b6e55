//! Coordinate Spaces
//!
//! Conversions between the three coordinate systems used by layout,
//! hit-testing and rendering:
//!
//! - **Pixel**: integer cells of the logical `resolution × resolution` grid
//! - **Screen**: device pixels of the canvas
//! - **Ratio**: `[0, 1]` fractions of the canvas width/height
//!
//! Every conversion is a pure function of a value and a [`ResolutionContext`].
//! Screen values produced from ratios are always quantized to multiples of the
//! pixel size, so ratio-placed UI never straddles a logical pixel boundary.
//! Converting such a screen value back to a ratio is lossy by up to half a
//! pixel; nothing tries to recover the original ratio.
//!
//! Values are never clamped here. Keeping things on screen (camera bounds,
//! placement) is the caller's job.
//!
//! # Example
//!
//! ```
//! use pixel_outpost::coords::{PixelVec, RatioVec, ResolutionContext, ScreenVec};
//!
//! let ctx = ResolutionContext::new(64, 640, 640).unwrap();
//! assert_eq!(ctx.pixel_size(), 10.0);
//! assert_eq!(ctx.pixel_to_screen(PixelVec::new(5, 5)), ScreenVec::new(50.0, 50.0));
//! assert_eq!(ctx.ratio_to_screen(RatioVec::new(0.5, 0.5)), ScreenVec::new(320.0, 320.0));
//! assert_eq!(ctx.screen_to_pixel(ScreenVec::new(321.0, 324.0)), PixelVec::new(32, 32));
//! ```

use std::ops::{Add, Sub};
use thiserror::Error;

/// Raised only when building a context; conversions themselves are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("logical resolution must be non-zero")]
    ZeroResolution,

    #[error("canvas dimensions must be non-zero (got {width}x{height})")]
    ZeroCanvas { width: u32, height: u32 },
}

/// Rounds halves toward positive infinity.
///
/// Used by every quantizing conversion so that `-2.5` and `2.5` both snap
/// "rightwards", keeping negative (camera-shifted) positions on the same grid
/// as positive ones.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Integer cell index on the logical grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelVec {
    pub x: i32,
    pub y: i32,
}

/// Device pixel position or extent on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenVec {
    pub x: f64,
    pub y: f64,
}

/// Fraction of the canvas width (x) and height (y)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatioVec {
    pub x: f64,
    pub y: f64,
}

impl PixelVec {
    pub const fn new(x: i32, y: i32) -> Self {
        PixelVec { x, y }
    }
}

impl ScreenVec {
    pub const fn new(x: f64, y: f64) -> Self {
        ScreenVec { x, y }
    }
}

impl RatioVec {
    pub const fn new(x: f64, y: f64) -> Self {
        RatioVec { x, y }
    }
}

impl Add for PixelVec {
    type Output = PixelVec;

    fn add(self, rhs: PixelVec) -> PixelVec {
        PixelVec::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelVec {
    type Output = PixelVec;

    fn sub(self, rhs: PixelVec) -> PixelVec {
        PixelVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for ScreenVec {
    type Output = ScreenVec;

    fn add(self, rhs: ScreenVec) -> ScreenVec {
        ScreenVec::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenVec {
    type Output = ScreenVec;

    fn sub(self, rhs: ScreenVec) -> ScreenVec {
        ScreenVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Which coordinate system a [`Coord`] is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Pixel,
    Screen,
    Ratio,
}

/// A coordinate pair tagged with its space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    Pixel(PixelVec),
    Screen(ScreenVec),
    Ratio(RatioVec),
}

impl Coord {
    pub fn space(&self) -> Space {
        match self {
            Coord::Pixel(_) => Space::Pixel,
            Coord::Screen(_) => Space::Screen,
            Coord::Ratio(_) => Space::Ratio,
        }
    }
}

/// Fixed logical resolution plus the current device canvas size.
///
/// `pixel_size` is derived from the canvas width. Canvases whose dimensions
/// are not exact multiples of it are tolerated: quantizing conversions all
/// round through [`round_half_up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionContext {
    logical_resolution: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl ResolutionContext {
    pub fn new(
        logical_resolution: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, ResolutionError> {
        if logical_resolution == 0 {
            return Err(ResolutionError::ZeroResolution);
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(ResolutionError::ZeroCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }

        Ok(ResolutionContext {
            logical_resolution,
            canvas_width,
            canvas_height,
        })
    }

    pub fn logical_resolution(&self) -> u32 {
        self.logical_resolution
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Device pixels per logical pixel
    pub fn pixel_size(&self) -> f64 {
        self.canvas_width as f64 / self.logical_resolution as f64
    }

    /// Exact: `p * pixel_size`
    pub fn pixel_to_screen(&self, p: PixelVec) -> ScreenVec {
        let size = self.pixel_size();
        ScreenVec::new(p.x as f64 * size, p.y as f64 * size)
    }

    /// Lossy unless `s` is already pixel-aligned
    pub fn screen_to_pixel(&self, s: ScreenVec) -> PixelVec {
        let size = self.pixel_size();
        PixelVec::new(
            round_half_up(s.x / size) as i32,
            round_half_up(s.y / size) as i32,
        )
    }

    /// Snaps a screen coordinate onto the pixel grid
    pub fn round_screen(&self, s: ScreenVec) -> ScreenVec {
        let size = self.pixel_size();
        ScreenVec::new(
            round_half_up(s.x / size) * size,
            round_half_up(s.y / size) * size,
        )
    }

    /// Always quantized to the pixel grid
    pub fn ratio_to_screen(&self, r: RatioVec) -> ScreenVec {
        self.round_screen(ScreenVec::new(
            r.x * self.canvas_width as f64,
            r.y * self.canvas_height as f64,
        ))
    }

    pub fn screen_to_ratio(&self, s: ScreenVec) -> RatioVec {
        RatioVec::new(
            s.x / self.canvas_width as f64,
            s.y / self.canvas_height as f64,
        )
    }

    pub fn pixel_to_ratio(&self, p: PixelVec) -> RatioVec {
        let res = self.logical_resolution as f64;
        RatioVec::new(p.x as f64 / res, p.y as f64 / res)
    }

    pub fn ratio_to_pixel(&self, r: RatioVec) -> PixelVec {
        let res = self.logical_resolution as f64;
        PixelVec::new(
            round_half_up(r.x * res) as i32,
            round_half_up(r.y * res) as i32,
        )
    }

    /// Converts a tagged coordinate into `target` space.
    pub fn convert(&self, coord: Coord, target: Space) -> Coord {
        match (coord, target) {
            (Coord::Pixel(p), Space::Screen) => Coord::Screen(self.pixel_to_screen(p)),
            (Coord::Pixel(p), Space::Ratio) => Coord::Ratio(self.pixel_to_ratio(p)),
            (Coord::Screen(s), Space::Pixel) => Coord::Pixel(self.screen_to_pixel(s)),
            (Coord::Screen(s), Space::Ratio) => Coord::Ratio(self.screen_to_ratio(s)),
            (Coord::Ratio(r), Space::Screen) => Coord::Screen(self.ratio_to_screen(r)),
            (Coord::Ratio(r), Space::Pixel) => Coord::Pixel(self.ratio_to_pixel(r)),
            (same, _) => same,
        }
    }
}
