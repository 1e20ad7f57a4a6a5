// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main struct
//!
//! The carver owns an image and its energy map, answers seam queries,
//! and removes seams one at a time.  Only the vertical operations are
//! really implemented; the horizontal ones flip the image on its side,
//! do the vertical thing, and flip it back.

use crate::energy::calculate_energy;
use crate::error::{Result, SeamError};
use crate::flipper::transpose_image;
use crate::seamfinder::energy_to_vertical_seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, RgbImage};
use tracing::debug;

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.

#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

/// Check that `seam` could be cut out of an image `across` pixels wide
/// and `along` pixels long: one entry per step along the seam, every
/// entry inside the image, and no entry more than one pixel away from
/// its neighbour.
fn validate_seam(seam: &[u32], across: u32, along: u32) -> Result<()> {
    if across <= 1 {
        return Err(SeamError::InvalidArgument(
            "the image is too small to remove a seam".to_string(),
        ));
    }
    if seam.len() != along as usize {
        return Err(SeamError::InvalidArgument(format!(
            "seam has {} entries, expected {}",
            seam.len(),
            along
        )));
    }
    if let Some(index) = seam.iter().find(|&&index| index >= across) {
        return Err(SeamError::InvalidArgument(format!(
            "seam index {} is outside 0..{}",
            index, across
        )));
    }
    if let Some(pair) = seam.windows(2).find(|pair| pair[0].abs_diff(pair[1]) > 1) {
        return Err(SeamError::InvalidArgument(format!(
            "seam jumps from {} to {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

// Every pixel left of the seam stays put, every pixel right of it
// slides one column over.
fn remove_vertical_seam(image: &RgbImage, seam: &[u32]) -> RgbImage {
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width - 1, height, |x, y| {
        let source_x = if x < seam[y as usize] { x } else { x + 1 };
        *image.get_pixel(source_x, y)
    })
}

/// A struct for holding the image to be carved, along with the energy
/// of every one of its pixels.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: RgbImage,
    energy: TwoDimensionalMap<f64>,
}

impl SeamCarver {
    /// Takes ownership of an image and computes its energy map.  The
    /// image must be at least one pixel wide and one pixel tall.
    pub fn new(picture: RgbImage) -> Result<Self> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::InvalidArgument(format!(
                "cannot carve an empty {}x{} image",
                width, height
            )));
        }
        let energy = calculate_energy(&picture);
        debug!(width, height, "built seam carver");
        Ok(SeamCarver { picture, energy })
    }

    /// Copies any 8-bit image into a new carver, converting every pixel
    /// to RGB along the way.
    pub fn from_view<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        Self::new(RgbImage::from_fn(width, height, |x, y| {
            image.get_pixel(x, y).to_rgb()
        }))
    }

    /// The image as it stands after every removal so far.
    pub fn picture(&self) -> &RgbImage {
        &self.picture
    }

    /// Consume the carver, handing back the carved image.
    pub fn into_picture(self) -> RgbImage {
        self.picture
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// The cached energy of every pixel of the current image.
    pub fn energy_map(&self) -> &TwoDimensionalMap<f64> {
        &self.energy
    }

    /// The energy of the pixel at `(x, y)`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.get(x, y).ok_or(SeamError::OutOfRange {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The cheapest top-to-bottom seam: one column index per row.
    pub fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&self.energy)
    }

    /// The cheapest left-to-right seam: one row index per column.
    ///
    /// Flips the image in place for the duration of the search, which is
    /// why this needs `&mut self` even though the image comes back
    /// unchanged.
    pub fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.transpose();
        let seam = self.find_vertical_seam();
        self.transpose();
        seam
    }

    /// Cut a vertical seam out of the image, making it one column
    /// narrower.  On error the image is left as it was.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        validate_seam(seam, self.width(), self.height())?;
        self.carve_vertical(seam);
        debug!(
            width = self.width(),
            height = self.height(),
            "removed vertical seam"
        );
        Ok(())
    }

    /// Cut a horizontal seam out of the image, making it one row
    /// shorter.  On error the image is left as it was.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        // Validate before flipping, so a bad seam never leaves the
        // image on its side.
        validate_seam(seam, self.height(), self.width())?;
        self.transpose();
        self.carve_vertical(seam);
        self.transpose();
        debug!(
            width = self.width(),
            height = self.height(),
            "removed horizontal seam"
        );
        Ok(())
    }

    // This is absurdly inefficient, as the entire energy map and
    // seam digraph is recalculated every time.  It should be
    // possible to find the span of columns or rows affected by the
    // carve and recalculate only the new ones.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating directions while both dimensions are
    /// too big.  Fails without touching the image if asked to grow or
    /// to shrink to nothing.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if new_width > width || new_height > height {
            return Err(SeamError::InvalidArgument(format!(
                "cannot upscale a {}x{} image to {}x{}",
                width, height, new_width, new_height
            )));
        }
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::InvalidArgument(format!(
                "cannot carve an image down to {}x{}",
                new_width, new_height
            )));
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam)
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    // The seam must already have passed `validate_seam`.
    fn carve_vertical(&mut self, seam: &[u32]) {
        self.picture = remove_vertical_seam(&self.picture, seam);
        self.energy = calculate_energy(&self.picture);
    }

    // Flip the image and its energy map on their sides.  Doing it twice
    // puts everything back where it was.
    fn transpose(&mut self) {
        self.picture = transpose_image(&self.picture);
        self.energy = self.energy.transposed();
    }
}
