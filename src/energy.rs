// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-pixel energy: the Sobel gradient magnitude of the intensity grid.
//!
//! Missing neighbors at the image border are replicated rather than
//! wrapped or mirrored.  The replication rule for the diagonals is
//! nested: a diagonal with no horizontal neighbor collapses to the
//! pixel itself, while a diagonal with a horizontal neighbor but no
//! vertical one falls back to that horizontal neighbor.  The nesting
//! is observable in border energies, so it is part of the contract,
//! not an implementation detail.

use crate::cq;
use crate::gridmap::GridMap;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

// Truncation toward zero is deliberate: 1020, 1020 must land on 1442,
// not round up to 1443.
#[inline]
fn magnitude(gx: i32, gy: i32) -> u32 {
    <f64 as From<i32>>::from(gx * gx + gy * gy).sqrt() as u32
}

/// Compute the energy of every pixel in an intensity grid.  Both
/// gradient components are bounded by 4 × 255 = 1020, so every energy
/// value fits in `0 ..= 1442`.
pub fn compute_energy(gray: &GridMap<u8>) -> GridMap<u32> {
    let (width, height) = (gray.width, gray.height);
    let (mw, mh) = (width - 1, height - 1);

    let px = |x: u32, y: u32| <i32 as From<u8>>::from(gray[(x, y)]);
    let energy = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let here = px(x, y);
            let (left, right, up, down) = (
                cq!(x == 0, here, px(x - 1, y)),
                cq!(x >= mw, here, px(x + 1, y)),
                cq!(y == 0, here, px(x, y - 1)),
                cq!(y >= mh, here, px(x, y + 1)),
            );
            let (top_left, top_right, bottom_left, bottom_right) = (
                cq!(x == 0, here, cq!(y == 0, px(x - 1, y), px(x - 1, y - 1))),
                cq!(x >= mw, here, cq!(y == 0, px(x + 1, y), px(x + 1, y - 1))),
                cq!(x == 0, here, cq!(y >= mh, px(x - 1, y), px(x - 1, y + 1))),
                cq!(x >= mw, here, cq!(y >= mh, px(x + 1, y), px(x + 1, y + 1))),
            );

            let gx = top_left - top_right + 2 * (left - right) + bottom_left - bottom_right;
            let gy = top_left - bottom_left + 2 * (up - down) + top_right - bottom_right;
            magnitude(gx, gy)
        })
        .collect();
    GridMap::from_raw(width, height, energy)
}

/// Render an energy grid as a grayscale image, normalized so the
/// strongest edge maps to full white.  Handy for eyeballing what the
/// seam search is about to avoid.
pub fn energy_to_image(energy: &GridMap<u32>) -> GrayImage {
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(energy.width, energy.height);
    let factor = std::cmp::max(1, *energy.as_raw().iter().max().unwrap_or(&1));
    for (y, x) in iproduct!(0..energy.height, 0..energy.width) {
        let c: u32 = NumCast::from(energy[(x, y)]).unwrap();
        let luma = [NumCast::from(clamp(c * 255 / factor, 0, 255)).unwrap()];
        out.put_pixel(x, y, Luma(luma));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy_of(gray: &[u8], width: u32, height: u32) -> Vec<u32> {
        let grid = GridMap::from_raw(width, height, gray.to_vec());
        compute_energy(&grid).as_raw().to_vec()
    }

    #[test]
    fn single_pixel_replicates_itself_everywhere() {
        // Every neighbor of a 1x1 image is the pixel itself, so both
        // gradients vanish.
        assert_eq!(energy_of(&[77], 1, 1), &[0]);
    }

    #[test]
    fn uniform_grid_has_zero_energy() {
        assert_eq!(energy_of(&[128; 9], 3, 3), &[0; 9]);
    }

    #[test]
    fn symmetric_bump_energies() {
        #[rustfmt::skip]
        let gray = [
            10, 50, 10,
            50, 100, 50,
            10, 50, 10,
        ];
        #[rustfmt::skip]
        let expected = [
            246, 180, 246,
            100, 0, 100,
            246, 180, 246,
        ];
        assert_eq!(energy_of(&gray, 3, 3), &expected);
    }

    #[test]
    fn vertical_step_edge() {
        // A hard 0 -> 255 step between columns 0 and 1.  The right
        // column sees only replicated 255s past the border, so its
        // gradient is zero under the nested replication rule.
        #[rustfmt::skip]
        let gray = [
            0, 255, 255,
            0, 255, 255,
            0, 255, 255,
        ];
        #[rustfmt::skip]
        let expected = [
            1020, 1020, 0,
            1020, 1020, 0,
            1020, 1020, 0,
        ];
        assert_eq!(energy_of(&gray, 3, 3), &expected);
    }

    #[test]
    fn horizontal_step_edge() {
        #[rustfmt::skip]
        let gray = [
            0, 0, 0,
            0, 0, 0,
            255, 255, 255,
        ];
        #[rustfmt::skip]
        let expected = [
            0, 0, 0,
            806, 1020, 806,
            806, 1020, 806,
        ];
        assert_eq!(energy_of(&gray, 3, 3), &expected);
    }

    #[test]
    fn magnitude_truncates_toward_zero() {
        // sqrt(2) * 1020 = 1442.497..., the worst case for 8-bit input.
        assert_eq!(magnitude(1020, 1020), 1442);
        assert_eq!(magnitude(1442, 0), 1442);
        assert_eq!(magnitude(3, 4), 5);
        assert_eq!(magnitude(-3, 4), 5);
        assert_eq!(magnitude(1, 1), 1);
    }

    #[test]
    fn dump_normalizes_to_full_range() {
        let energy = GridMap::from_raw(2, 1, vec![0u32, 1442]);
        let img = energy_to_image(&energy);
        assert_eq!(img.get_pixel(0, 0), &Luma([0u8]));
        assert_eq!(img.get_pixel(1, 0), &Luma([255u8]));
    }

    #[test]
    fn dump_of_flat_grid_does_not_divide_by_zero() {
        let energy = GridMap::from_raw(2, 2, vec![0u32; 4]);
        let img = energy_to_image(&energy);
        assert!(img.pixels().all(|p| p == &Luma([0u8])));
    }
}
