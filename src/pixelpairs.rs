// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient of a pixel pair
//!
//! Given two pixels, the gradient between them is the squared
//! distance between the colors that make them up: the classic
//! d(R^2) + d(G^2) + d(B^2).

use image::{Pixel, Primitive};
use num_traits::NumCast;

/// (Pixel, Pixel) -> squared color distance
///
/// Takes the RGB channels from two pixels, maps the difference between
/// each channel, squares it, and sums them all up:
///
/// ```text
///        |Δ|² = (Δr)²+(Δg)²+(Δb)²
/// ```
#[inline]
pub fn gradient_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.0.iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let a: f64 = NumCast::from(*a).unwrap_or(0.0);
            let b: f64 = NumCast::from(*b).unwrap_or(0.0);
            (a - b) * (a - b)
        })
        .sum()
}
