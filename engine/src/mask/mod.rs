//! Collision masks: positioned shapes answering "is this pixel solid?".
//!
//! Every mask has an integer origin, which may be negative, and a
//! non-negative extent. Pixels outside the extent of a bitmap or a box are
//! empty. An inversion is solid wherever the mask it wraps is empty, so it is
//! solid outside its own bounding box as well. Queries between masks only
//! ever look inside bounding boxes.

mod bitmap;
mod invert;
mod solid;

pub use bitmap::{BitmapMask, Grid};
pub use invert::InvertMask;
pub use solid::BoxMask;

use crate::geometry::{intersection::intersection, point, rect, Point, Rect};

#[derive(Debug, Clone)]
pub enum Mask {
    Bitmap(BitmapMask),
    Box(BoxMask),
    Invert(InvertMask),
}

impl Mask {
    pub fn origin(&self) -> Point {
        match self {
            Mask::Bitmap(bitmap) => bitmap.origin,
            Mask::Box(solid) => solid.origin,
            Mask::Invert(invert) => invert.inner.origin(),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Mask::Bitmap(bitmap) => bitmap.width(),
            Mask::Box(solid) => solid.width(),
            Mask::Invert(invert) => invert.inner.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Mask::Bitmap(bitmap) => bitmap.height(),
            Mask::Box(solid) => solid.height(),
            Mask::Invert(invert) => invert.inner.height(),
        }
    }

    pub fn bounds(&self) -> Rect {
        let origin = self.origin();
        rect(origin.x, origin.y, self.width(), self.height())
    }

    /// Moves this mask by `(dx, dy)` in place. The origin saturates at the
    /// limits of `i32`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let origin = self.origin();
        self.set_origin(point(
            origin.x.saturating_add(dx),
            origin.y.saturating_add(dy),
        ));
    }

    /// A copy of this mask with its origin at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Mask {
        let mut other = self.clone();
        other.set_origin(point(x, y));
        other
    }

    /// A copy of this mask moved by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Mask {
        let mut other = self.clone();
        other.translate(dx, dy);
        other
    }

    /// Whether the pixel at the absolute coordinate `(x, y)` is solid.
    pub fn collides_at(&self, x: i32, y: i32) -> bool {
        match self {
            Mask::Bitmap(bitmap) => bitmap.collides_at(x, y),
            Mask::Box(solid) => solid.collides_at(x, y),
            Mask::Invert(invert) => invert.collides_at(x, y),
        }
    }

    /// Whether the bounding box of this mask lies entirely inside `frame`.
    pub fn framed_by(&self, frame: Rect) -> bool {
        let bounds = self.bounds();
        intersection(bounds, frame) == Some(bounds)
    }

    /// A solid box covering the bounding box of this mask.
    pub fn bounding_box(&self) -> Mask {
        Mask::Box(BoxMask::from(self.bounds()))
    }

    pub fn invert(&self) -> Mask {
        Mask::Invert(InvertMask::new(self.clone()))
    }

    fn set_origin(&mut self, origin: Point) {
        match self {
            Mask::Bitmap(bitmap) => bitmap.origin = origin,
            Mask::Box(solid) => solid.origin = origin,
            Mask::Invert(invert) => invert.inner.set_origin(origin),
        }
    }
}

impl From<BitmapMask> for Mask {
    fn from(bitmap: BitmapMask) -> Self {
        Mask::Bitmap(bitmap)
    }
}

impl From<BoxMask> for Mask {
    fn from(solid: BoxMask) -> Self {
        Mask::Box(solid)
    }
}

impl From<InvertMask> for Mask {
    fn from(invert: InvertMask) -> Self {
        Mask::Invert(invert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Mask {
        // #.
        // ##
        let grid = Grid::from_rows(&[[true, false], [true, true]]).unwrap();
        BitmapMask::new(grid).into()
    }

    #[test]
    fn translate_saturates_at_coordinate_limits() {
        let mut mask: Mask = BoxMask::with_origin(i32::MAX, i32::MIN, 1, 1).into();

        mask.translate(1, -1);

        assert_eq!(mask.origin(), point(i32::MAX, i32::MIN));
        assert_eq!(mask.translated(i32::MAX, 5).origin(), point(i32::MAX, i32::MIN + 5));
        assert_eq!(l_shape().invert().translated(i32::MIN, 0).origin(), point(i32::MIN, 0));
    }

    #[test]
    fn translate_moves_mask_in_place() {
        let mut mask = l_shape();

        mask.translate(3, -2);

        assert_eq!(mask.origin(), point(3, -2));
        assert!(mask.collides_at(3, -2));
        assert!(!mask.collides_at(4, -2));
        assert!(!mask.collides_at(0, 0));
    }

    #[test]
    fn at_returns_positioned_copy() {
        let mask = l_shape();

        let other = mask.at(-5, 7);

        assert_eq!(mask.origin(), point(0, 0));
        assert_eq!(other.bounds(), rect(-5, 7, 2, 2));
        assert!(other.collides_at(-4, 8));
    }

    #[test]
    fn translated_returns_moved_copy() {
        let mut mask = l_shape();
        mask.translate(1, 1);

        let other = mask.translated(2, 3);

        assert_eq!(mask.origin(), point(1, 1));
        assert_eq!(other.origin(), point(3, 4));
    }

    #[test]
    fn translated_bitmap_shares_raster() {
        let mask = l_shape();
        let other = mask.translated(10, 10);

        match (&mask, &other) {
            (Mask::Bitmap(a), Mask::Bitmap(b)) => assert!(a.shares_grid_with(b)),
            _ => panic!("expected bitmaps"),
        }
    }

    #[test]
    fn translating_invert_moves_wrapped_mask() {
        let mut invert = l_shape().invert();

        invert.translate(4, 4);

        assert_eq!(invert.bounds(), rect(4, 4, 2, 2));
        assert!(!invert.collides_at(4, 4));
        assert!(invert.collides_at(5, 4));
        match &invert {
            Mask::Invert(inner) => assert_eq!(inner.inner().origin(), point(4, 4)),
            _ => panic!("expected an inversion"),
        }
    }

    #[test]
    fn invert_at_repositions_wrapped_mask() {
        let invert = l_shape().invert().at(-1, -1);
        assert_eq!(invert.bounds(), rect(-1, -1, 2, 2));
    }

    #[parameterized(frame = {
        rect(0, 0, 2, 2), rect(-1, -1, 4, 4), rect(0, 0, 100, 2)
    })]
    fn mask_is_framed_by_enclosing_rect(frame: Rect) {
        assert!(l_shape().framed_by(frame));
    }

    #[parameterized(frame = {
        rect(2, 2, 2, 2), rect(1, 0, 2, 2), rect(0, 0, 1, 1), rect(-10, -10, 3, 3)
    })]
    fn mask_is_not_framed_by_partial_or_distant_rect(frame: Rect) {
        assert!(!l_shape().framed_by(frame));
    }

    #[test]
    fn bounding_box_covers_mask_bounds() {
        let mask = l_shape().at(3, 4);

        let bounding_box = mask.bounding_box();

        assert_eq!(bounding_box.bounds(), mask.bounds());
        assert!(bounding_box.collides_at(4, 4));
    }
}
