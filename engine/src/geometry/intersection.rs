use super::{rect, Point, Rect};

/// Half-open containment: the far edges `x + w` and `y + h` lie outside.
pub fn point_is_inside_rect(point: Point, rect: Rect) -> bool {
    let (point_x, point_y) = (point.x as i64, point.y as i64);

    let horizontal_overlap = rect.x as i64 <= point_x && point_x < rect.right();
    let vertical_overlap = rect.y as i64 <= point_y && point_y < rect.bottom();

    horizontal_overlap && vertical_overlap
}

/// Axis-aligned intersection of two rectangles.
///
/// Rectangles that merely touch give a zero-extent rectangle, rectangles that
/// are apart give `None`.
pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
    let x0 = a.x.max(b.x);
    let y0 = a.y.max(b.y);
    let x1 = a.right().min(b.right());
    let y1 = a.bottom().min(b.bottom());

    let w = x1 - x0 as i64;
    let h = y1 - y0 as i64;
    if w < 0 || h < 0 {
        return None;
    }

    Some(rect(x0, y0, w as u32, h as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point, rect};

    #[test]
    fn point_outside_rect() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │   │ o
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point(3, 1);
        assert!(!point_is_inside_rect(point, rect))
    }

    #[test]
    fn point_on_far_rect_side_is_outside() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │   o
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point(2, 1);
        assert!(!point_is_inside_rect(point, rect))
    }

    #[test]
    fn point_on_near_rect_side_is_inside() {
        //   0 1 2 3
        // 0 o───┐
        // 1 │   │
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point(0, 0);
        assert!(point_is_inside_rect(point, rect))
    }

    #[test]
    fn point_inside_rect() {
        //   0 1 2 3
        // 0 ┌───┐
        // 1 │ o │
        // 2 └───┘
        let rect = rect(0, 0, 2, 2);
        let point = point(1, 1);
        assert!(point_is_inside_rect(point, rect))
    }

    #[test]
    fn nothing_is_inside_empty_rect() {
        let rect = rect(4, 4, 0, 0);
        assert!(!point_is_inside_rect(point(4, 4), rect))
    }

    #[test]
    fn overlapping_rects_intersect() {
        //   0 1 2 3 4
        // 0 ┌─────┐
        // 1 │  ┌──┼──┐
        // 2 │  │  │  │
        // 3 └──┼──┘  │
        // 4    └─────┘
        let a = rect(0, 0, 3, 3);
        let b = rect(1, 1, 3, 3);

        let overlap = intersection(a, b);

        assert_eq!(overlap, Some(rect(1, 1, 2, 2)));
    }

    #[test]
    fn nested_rect_is_its_own_intersection() {
        let outer = rect(-5, -5, 20, 20);
        let inner = rect(2, 3, 4, 5);

        assert_eq!(intersection(outer, inner), Some(inner));
        assert_eq!(intersection(inner, outer), Some(inner));
    }

    #[test]
    fn touching_rects_have_empty_intersection() {
        let a = rect(0, 0, 2, 2);
        let b = rect(2, 0, 2, 2);

        let overlap = intersection(a, b).unwrap();

        assert!(overlap.is_empty());
        assert_eq!(overlap.x, 2);
        assert_eq!(overlap.w, 0);
    }

    #[test]
    fn distant_rects_do_not_intersect() {
        let a = rect(0, 0, 2, 2);
        let b = rect(10, 10, 2, 2);

        assert_eq!(intersection(a, b), None);
    }

    #[test]
    fn intersection_near_coordinate_limits_does_not_overflow() {
        let a = rect(i32::MAX - 1, 0, u32::MAX, 1);
        let b = rect(i32::MAX - 1, 0, 1, 1);

        assert_eq!(intersection(a, b), Some(b));
    }
}
