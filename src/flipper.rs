// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Maps the width to the original height, and vice versa, as well as
//! every x to y and vice versa.  Flipping an image this way turns
//! every horizontal seam into a vertical one, so only the vertical
//! seam search and removal need to exist.  Flipping twice returns the
//! original image.

use image::{ImageBuffer, Pixel};

/// Copy an image into a new buffer flipped across its main diagonal:
/// the pixel at `(x, y)` lands at `(y, x)`.
pub fn transpose_image<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(height, width, |x, y| *image.get_pixel(y, x))
}
