// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-cost vertical seam discovery.
//!
//! A seam is a connected top-to-bottom path, one column index per row,
//! where adjacent rows differ by at most one column.  The search is a
//! single top-down dynamic-programming pass over a cost grid, followed
//! by a backtrack through recorded parent columns.
//!
//! Tie-breaking is load-bearing: wherever two candidate costs are
//! equal — picking a parent column, or picking the cheapest bottom-row
//! cell — the lowest column index wins.  `min_by_key` over an
//! ascending range gives exactly that, and carve output is only
//! reproducible if it stays that way.

use crate::cq;
use crate::gridmap::GridMap;

/// One cell of the accumulation grid: the cheapest cumulative cost of
/// any path reaching this cell, and the column in the row above that
/// the cheapest path came from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
struct CostAndParent {
    cost: u32,
    parent: u32,
}

/// Given an energy grid, return the column indices that, zipped with
/// the range `(0..height)`, give the XY coordinates of the cheapest
/// connected top-to-bottom path.
pub fn find_vertical_seam(energy: &GridMap<u32>) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut target: GridMap<CostAndParent> = GridMap::new(width, height);

    // The first row's costs are its own energies.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let maxcol = width - 1;
    // For every subsequent row, each cell takes the cheapest of the
    // (at most) three cells above it, plus its own energy, and records
    // which column that was.
    for y in 1..height {
        for x in 0..width {
            let candidates = cq!(x == 0, 0, x - 1)..=cq!(x == maxcol, maxcol, x + 1);
            let parent_x = candidates
                .min_by_key(|c| target[(*c, y - 1)].cost)
                .unwrap();
            target[(x, y)] = CostAndParent {
                cost: energy[(x, y)] + target[(parent_x, y - 1)].cost,
                parent: parent_x,
            };
        }
    }

    // The cheapest bottom-row cell ends the seam.
    let mut seam_col = (0..width)
        .min_by_key(|x| target[(*x, height - 1)].cost)
        .unwrap();
    // Walk the parents back up, then flip the path top-to-bottom.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}
