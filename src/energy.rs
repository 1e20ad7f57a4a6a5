// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Every pixel gets a non-negative importance score.  The outer frame
//! of the image is pinned to a fixed, high constant so that seams
//! never prefer to run along the edge; every interior pixel scores the
//! dual-gradient magnitude of its four neighbours:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```

use crate::pixelpairs::gradient_of_pair;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// The energy of every pixel on the outer frame of an image.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The energy of a single pixel.  The caller guarantees `(x, y)` is
/// inside the image.
pub fn energy_of_pixel<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }

    let dx = gradient_of_pair(&image.get_pixel(x - 1, y), &image.get_pixel(x + 1, y));
    let dy = gradient_of_pair(&image.get_pixel(x, y - 1), &image.get_pixel(x, y + 1));
    (dx + dy).sqrt()
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  The whole field is
/// materialized at once; nothing is computed lazily.
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_of_pixel(image, x, y);
    }
    emap
}
