// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  Holds whatever a stage of
/// the carver needs per pixel: a plain `f64` for the energy map, or a
/// distance and back pointer for the seam search.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// does not hold exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The value at `(x, y)`, or `None` when the address is off the map.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.get_index(x, y)])
    }

    /// The map flipped across its main diagonal: the width becomes the
    /// height, and the cell at `(x, y)` moves to `(y, x)`.
    pub fn transposed(&self) -> Self {
        let mut flipped = TwoDimensionalMap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                flipped[(y, x)] = self[(x, y)];
            }
        }
        flipped
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
