use crate::geometry::{intersection::point_is_inside_rect, point, rect, Point, Rect};

/// A solid rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxMask {
    pub(super) origin: Point,
    w: u32,
    h: u32,
}

impl BoxMask {
    pub fn new(w: u32, h: u32) -> Self {
        BoxMask::with_origin(0, 0, w, h)
    }

    pub fn with_origin(x: i32, y: i32, w: u32, h: u32) -> Self {
        BoxMask {
            origin: point(x, y),
            w,
            h,
        }
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn bounds(&self) -> Rect {
        rect(self.origin.x, self.origin.y, self.w, self.h)
    }

    pub fn collides_at(&self, x: i32, y: i32) -> bool {
        point_is_inside_rect(point(x, y), self.bounds())
    }
}

impl From<Rect> for BoxMask {
    fn from(rect: Rect) -> Self {
        BoxMask::with_origin(rect.x, rect.y, rect.w, rect.h)
    }
}
