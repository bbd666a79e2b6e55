//! Rectangles and overlap tests.
//!
//! Two rectangle flavours exist because the game reasons in two spaces:
//!
//! - [`ScreenRect`]: device-pixel bounding boxes of UI elements, used for
//!   pointer hit-testing. Containment is *closed* (edges count as inside).
//! - [`PixelRect`]: footprints on the logical grid, used for module placement.
//!   Intersection is *open* (touching edges do not overlap).

use crate::coords::{PixelVec, ScreenVec};

/// Axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        ScreenRect { x, y, width, height }
    }

    pub fn from_origin_size(origin: ScreenVec, size: ScreenVec) -> Self {
        ScreenRect::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn origin(&self) -> ScreenVec {
        ScreenVec::new(self.x, self.y)
    }

    pub fn size(&self) -> ScreenVec {
        ScreenVec::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> ScreenVec {
        ScreenVec::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Closed containment: a point on any edge is inside.
    pub fn contains_point(&self, point: ScreenVec) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Axis-aligned box on the logical pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        PixelRect { x, y, width, height }
    }

    pub fn from_origin_size(origin: PixelVec, size: PixelVec) -> Self {
        PixelRect::new(origin.x, origin.y, size.x, size.y)
    }
}

/// Anything occupying a footprint on the pixel grid.
pub trait Collidable {
    fn pixel_bounds(&self) -> PixelRect;
}

/// Checks if two grid footprints overlap.
///
/// For two rectangles to NOT intersect one of them must lie entirely to the
/// left, right, above or below the other. Touching edges do not count.
pub fn aabb_intersect(a: &PixelRect, b: &PixelRect) -> bool {
    let x_overlap = a.x < b.x + b.width && a.x + a.width > b.x;
    let y_overlap = a.y < b.y + b.height && a.y + a.height > b.y;

    x_overlap && y_overlap
}

/// True if `candidate` overlaps any of `others`.
pub fn overlaps_any<'a, T, I>(candidate: &PixelRect, others: I) -> bool
where
    T: Collidable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    others
        .into_iter()
        .any(|other| aabb_intersect(candidate, &other.pixel_bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(PixelRect);

    impl Collidable for Block {
        fn pixel_bounds(&self) -> PixelRect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = PixelRect::new(0, 0, 8, 8);
        let rect_b = PixelRect::new(4, 4, 8, 8);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = PixelRect::new(0, 0, 8, 8);
        let rect_b = PixelRect::new(8, 0, 8, 8);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = PixelRect::new(0, 0, 30, 30);
        let small = PixelRect::new(10, 10, 2, 2);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_screen_rect_contains_edges() {
        let rect = ScreenRect::new(10.0, 20.0, 30.0, 40.0);

        assert!(rect.contains_point(ScreenVec::new(10.0, 20.0)));
        assert!(rect.contains_point(ScreenVec::new(40.0, 60.0)));
        assert!(rect.contains_point(ScreenVec::new(25.0, 30.0)));
        assert!(!rect.contains_point(ScreenVec::new(40.5, 30.0)));
        assert!(!rect.contains_point(ScreenVec::new(25.0, 19.9)));
    }

    #[test]
    fn test_overlaps_any() {
        let placed = vec![
            Block(PixelRect::new(5, 5, 6, 6)),
            Block(PixelRect::new(32, 5, 6, 6)),
        ];

        assert!(overlaps_any(&PixelRect::new(30, 8, 4, 4), &placed));
        assert!(!overlaps_any(&PixelRect::new(11, 5, 4, 4), &placed));
    }
}
