use std::{fmt, sync::Arc};

use itertools::Itertools;

use crate::geometry::{point, Point};

/// Row-major grid of pixels, `true` meaning solid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Grid {
    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<bool>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            pixels,
        }
    }

    /// Builds a grid from equally long rows. Returns `None` for ragged rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let width = u32::try_from(width).ok()?;
        let height = u32::try_from(rows.len()).ok()?;
        let pixels = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Some(Grid::from_pixels(width, height, pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Out of range pixels read as empty.
    pub fn get(&self, col: u32, row: u32) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |row| &self.pixels[row * width..(row + 1) * width])
    }

    pub fn count_solid(&self) -> usize {
        self.pixels.iter().filter(|pixel| **pixel).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|pixel| if *pixel { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{}", text)
    }
}

/// A mask backed by a decoded raster. Clones share the raster.
#[derive(Debug, Clone)]
pub struct BitmapMask {
    pub(super) origin: Point,
    grid: Arc<Grid>,
}

impl BitmapMask {
    pub fn new(grid: Grid) -> Self {
        BitmapMask {
            origin: point(0, 0),
            grid: Arc::new(grid),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width
    }

    pub fn height(&self) -> u32 {
        self.grid.height
    }

    pub fn shares_grid_with(&self, other: &BitmapMask) -> bool {
        Arc::ptr_eq(&self.grid, &other.grid)
    }

    pub fn collides_at(&self, x: i32, y: i32) -> bool {
        let col = x as i64 - self.origin.x as i64;
        let row = y as i64 - self.origin.y as i64;
        if col < 0 || row < 0 {
            return false;
        }
        match (u32::try_from(col), u32::try_from(row)) {
            (Ok(col), Ok(row)) => self.grid.get(col, row),
            _ => false,
        }
    }
}
