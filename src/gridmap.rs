// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major two-dimensional container.
//!
//! Every grid the carver builds is one of these: the `u8` intensity
//! grid, the `u32` energy grid, and the cost-plus-parent grid the seam
//! search accumulates.  A single `Vec` with explicit width and height
//! beats a `Vec<Vec<_>>` here because all four grids are rebuilt from
//! scratch on every seam removal.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field over any `Default + Copy`
/// cell type, indexed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> GridMap<P> {
    /// A new grid with every cell set to the type's default.
    pub fn new(width: u32, height: u32) -> Self {
        GridMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major cell vector.  The vector's length
    /// must be exactly `width * height`.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        GridMap {
            width,
            height,
            cells,
        }
    }

    // The number one rule of this game: keep the index math in one
    // place and never touch it again.  Same row-major order as
    // image.rs uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cells in row-major order.
    pub fn as_raw(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for GridMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
