// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types for the seam carver.

use thiserror::Error;

/// Result alias for seam carving operations.
pub type Result<T> = std::result::Result<T, SeamError>;

/// Everything the carver can refuse to do.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeamError {
    /// A pixel address outside the current image.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A malformed seam, an image that cannot shrink any further, or an
    /// otherwise unusable request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
