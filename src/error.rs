// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! All of these are terminal: there is no retry and no partial-result
//! salvage.  Decoding fails before any carving starts, encoding fails
//! after all of it has finished, and the geometry checks fire before
//! the working image is touched.

use failure::Fail;
use std::path::PathBuf;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// The input file could not be read or is not a decodable image.
    #[fail(display = "could not decode {:?}: {}", path, cause)]
    Decode {
        path: PathBuf,
        #[fail(cause)]
        cause: image::ImageError,
    },

    /// The carved result could not be written out.
    #[fail(display = "could not encode {:?}: {}", path, cause)]
    Encode {
        path: PathBuf,
        #[fail(cause)]
        cause: std::io::Error,
    },

    /// More seams requested than the image has spare columns.  Checked
    /// up front, before any seam is removed.
    #[fail(
        display = "cannot remove {} seams from an image only {} pixels wide",
        requested, width
    )]
    SeamOverflow { requested: u32, width: u32 },

    /// A zero-width or zero-height image has no seams at all.
    #[fail(display = "image has no pixels to carve")]
    EmptyImage,

    /// The pixel buffer does not match its declared dimensions.
    #[fail(
        display = "pixel buffer holds {} bytes but {}x{} RGBA needs {}",
        actual, width, height, expected
    )]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
