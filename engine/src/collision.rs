use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::{
    geometry::{intersection::intersection, Rect},
    mask::Mask,
};

/// The intersection of the bounding boxes of two masks.
pub fn overlap(a: &Mask, b: &Mask) -> Option<Rect> {
    intersection(a.bounds(), b.bounds())
}

/// Whether some pixel is solid in both masks.
pub fn collision(a: &Mask, b: &Mask) -> bool {
    match overlap(a, b) {
        Some(overlap) => pixels(overlap).any(|(x, y)| a.collides_at(x, y) && b.collides_at(x, y)),
        None => {
            log::trace!("no overlap between {:?} and {:?}", a.bounds(), b.bounds());
            false
        }
    }
}

/// Whether every solid pixel of `a` is also solid in `b`.
///
/// Scans all of `a`, so pixels of `a` beyond the bounds of `b` count against it.
pub fn within(a: &Mask, b: &Mask) -> bool {
    pixels(a.bounds()).all(|(x, y)| !a.collides_at(x, y) || b.collides_at(x, y))
}

/// Coordinates of every pixel in `rect`, row by row.
fn pixels(rect: Rect) -> impl Iterator<Item = (i32, i32)> {
    let columns = span(rect.x, rect.right());
    let rows = span(rect.y, rect.bottom());

    rows.cartesian_product(columns).map(|(y, x)| (x, y))
}

/// Addressable coordinates in `[start, end)`, stopping at `i32::MAX`.
fn span(start: i32, end: i64) -> RangeInclusive<i32> {
    let last = (end - 1).min(i32::MAX as i64);
    if last < start as i64 {
        return 1..=0;
    }
    start..=last as i32
}
