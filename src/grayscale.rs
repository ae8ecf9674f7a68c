// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reduce an RGBA buffer to a single-channel intensity grid.

use crate::gridmap::GridMap;

/// Collapse an interleaved RGBA buffer into one intensity value per
/// pixel: the truncated integer mean of the three color channels.
/// The alpha channel carries no edge information and is ignored.
pub fn to_grayscale(pixels: &[u8], width: u32, height: u32) -> GridMap<u8> {
    debug_assert_eq!(pixels.len(), 4 * width as usize * height as usize);
    let gray = pixels
        .chunks_exact(4)
        .map(|p| ((u16::from(p[0]) + u16::from(p[1]) + u16::from(p[2])) / 3) as u8)
        .collect();
    GridMap::from_raw(width, height, gray)
}
