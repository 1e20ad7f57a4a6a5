// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] owns an RGB image and the energy of each of its
//! pixels.  Ask it for the cheapest vertical or horizontal seam, hand
//! that seam back to have it removed, and repeat until the image is
//! the size you want.

pub mod energy;
pub mod error;
mod flipper;
mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, BORDER_ENERGY};
pub use error::{Result, SeamError};
pub use seamcarver::SeamCarver;
pub use seamfinder::energy_to_vertical_seam;
pub use twodmap::TwoDimensionalMap;
