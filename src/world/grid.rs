//! Occupancy grid the ray caster walks.
//!
//! The map is authored as an image where three reference colours stand for
//! the three cell kinds.  That encoding is resolved exactly once, here; the
//! renderer only ever sees [`Cell`]s.

use glam::Vec2;
use thiserror::Error;

use crate::{renderer::Rgba, renderer::color::rgba, world::texture::Texture};

/// What occupies one grid unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    /// Walkable and transparent to rays; spawns a billboard.
    Decoration,
}

/// Reference colours of the authored map (exact ARGB match, alpha included).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapLegend {
    pub empty: Rgba,
    pub wall: Rgba,
    pub decoration: Rgba,
}

impl Default for MapLegend {
    fn default() -> Self {
        Self {
            empty: rgba(255, 255, 255, 255),
            wall: rgba(0, 0, 0, 255),
            decoration: rgba(38, 127, 0, 255),
        }
    }
}

impl MapLegend {
    /// Pure function of the source pixel; unknown colours are `Empty`.
    #[inline]
    pub fn classify(&self, px: Rgba) -> Cell {
        if px == self.wall {
            Cell::Wall
        } else if px == self.decoration {
            Cell::Decoration
        } else {
            Cell::Empty
        }
    }

    /// Inverse mapping, used when drawing the minimap.
    #[inline]
    pub fn colour_of(&self, cell: Cell) -> Rgba {
        match cell {
            Cell::Empty => self.empty,
            Cell::Wall => self.wall,
            Cell::Decoration => self.decoration,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("map has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} cells, got {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Row-major grid of classified cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Classify every pixel of `src`.  Dimensions are taken from the image.
    pub fn from_texture(src: &Texture, legend: &MapLegend) -> Self {
        Self {
            width: src.w,
            height: src.h,
            cells: src.pixels.iter().map(|&px| legend.classify(px)).collect(),
        }
    }

    /// Text form: `#` wall, `B` decoration, anything else empty.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars().map(|c| match c {
                '#' => Cell::Wall,
                'B' => Cell::Decoration,
                _ => Cell::Empty,
            }));
        }
        Self::from_cells(width, height, cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell at `(x, y)`.  Caller must bounds-check first.
    #[inline]
    pub fn classify(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Bounds-checked lookup.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.contains(x, y).then(|| self.classify(x as usize, y as usize))
    }

    /// Cell containing the continuous point `p`.
    #[inline]
    pub fn cell_at(&self, p: Vec2) -> Option<Cell> {
        let c = p.floor();
        self.get(c.x as i32, c.y as i32)
    }

    /// Walls and everything outside the map stop the player.
    pub fn is_blocking(&self, p: Vec2) -> bool {
        !matches!(self.cell_at(p), Some(Cell::Empty | Cell::Decoration))
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = cell;
    }

    /// Every Decoration cell in row-major order.
    pub fn decorations(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Decoration)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn legend_exact_match_only() {
        let legend = MapLegend::default();
        assert_eq!(legend.classify(rgba(0, 0, 0, 255)), Cell::Wall);
        assert_eq!(legend.classify(rgba(38, 127, 0, 255)), Cell::Decoration);
        assert_eq!(legend.classify(rgba(255, 255, 255, 255)), Cell::Empty);
        // alpha participates in the match
        assert_eq!(legend.classify(rgba(0, 0, 0, 254)), Cell::Empty);
        assert_eq!(legend.classify(rgba(1, 0, 0, 255)), Cell::Empty);
    }

    #[test]
    fn texture_scan_keeps_dimensions() {
        let legend = MapLegend::default();
        let src = Texture::new(
            3,
            2,
            vec![
                legend.empty,
                legend.wall,
                legend.decoration,
                0xFF_123456,
                legend.wall,
                legend.empty,
            ],
        )
        .unwrap();
        let map = GridMap::from_texture(&src, &legend);
        assert_eq!((map.width(), map.height()), (3, 2));
        assert_eq!(map.classify(1, 0), Cell::Wall);
        assert_eq!(map.classify(2, 0), Cell::Decoration);
        assert_eq!(map.classify(0, 1), Cell::Empty);
        assert_eq!(map.decorations().collect::<Vec<_>>(), vec![(2, 0)]);
    }

    #[test]
    fn ascii_rejects_ragged_rows() {
        let err = GridMap::from_ascii(&["###", "#."]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(GridMap::from_ascii(&[]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn bounds_checked_lookups() {
        let map = GridMap::from_ascii(&["#.", ".B"]).unwrap();
        assert_eq!(map.get(-1, 0), None);
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(1, 1), Some(Cell::Decoration));
        assert_eq!(map.cell_at(vec2(0.99, 0.2)), Some(Cell::Wall));
        assert_eq!(map.cell_at(vec2(-0.2, 0.2)), None);
    }

    #[test]
    fn blocking_covers_walls_and_outside() {
        let map = GridMap::from_ascii(&["#.", ".B"]).unwrap();
        assert!(map.is_blocking(vec2(0.5, 0.5)));
        assert!(map.is_blocking(vec2(5.0, 0.5)));
        assert!(!map.is_blocking(vec2(1.5, 0.5)));
        assert!(!map.is_blocking(vec2(1.5, 1.5)));
    }
}
