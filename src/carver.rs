// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal and the carve loop.
//!
//! `remove_vertical_seam` deletes one recorded column per row from a
//! flat RGBA buffer.  `Carver` owns the working image and runs the
//! whole pipeline — grayscale, energy, seam search, removal — once per
//! requested seam, shrinking its width by one each time.  Nothing is
//! cached between iterations; each seam starts from a fresh intensity
//! grid because the previous removal invalidated the old one.

use crate::energy::compute_energy;
use crate::error::CarveError;
use crate::grayscale::to_grayscale;
use crate::seam::find_vertical_seam;

/// Copy `pixels` into a new buffer one pixel narrower, dropping the
/// seam's recorded column from each row.  Rows are independent: the
/// bytes before the cut and the bytes after it are carried over
/// unchanged, so channel order and row boundaries survive intact.
///
/// Every `seam[y]` must be a valid column for `width`.
pub fn remove_vertical_seam(pixels: &[u8], width: u32, height: u32, seam: &[u32]) -> Vec<u8> {
    let row_bytes = 4 * width as usize;
    debug_assert_eq!(pixels.len(), row_bytes * height as usize);
    debug_assert_eq!(seam.len(), height as usize);

    let mut out = Vec::with_capacity((row_bytes - 4) * height as usize);
    for (y, row) in pixels.chunks_exact(row_bytes).enumerate() {
        let cut = 4 * seam[y] as usize;
        out.extend_from_slice(&row[..cut]);
        out.extend_from_slice(&row[cut + 4..]);
    }
    out
}

/// The working image being carved: an owned RGBA buffer and its
/// current dimensions.  Height never changes; width drops by one per
/// seam.
pub struct Carver {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Carver {
    /// Take ownership of a decoded RGBA buffer.  Rejects empty images
    /// and buffers that disagree with their declared dimensions, so
    /// the pipeline can index freely afterwards.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage);
        }
        let expected = 4 * width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CarveError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Carver {
            pixels,
            width,
            height,
        })
    }

    /// Remove `seams` minimum-energy vertical seams, one at a time.
    /// The geometry check runs before any work: carving to zero width
    /// is refused outright rather than clamped, and on error the image
    /// is untouched.
    pub fn carve(&mut self, seams: u32) -> Result<(), CarveError> {
        if seams >= self.width {
            return Err(CarveError::SeamOverflow {
                requested: seams,
                width: self.width,
            });
        }
        for _ in 0..seams {
            let gray = to_grayscale(&self.pixels, self.width, self.height);
            let energy = compute_energy(&gray);
            let seam = find_vertical_seam(&energy);
            self.pixels = remove_vertical_seam(&self.pixels, self.width, self.height, &seam);
            self.width -= 1;
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The current working buffer, row-major RGBA.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}
