// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image width reduction by seam carving.
//!
//! An image shrinks one pixel column at a time: a grayscale reduction
//! feeds a Sobel gradient-magnitude map, a dynamic program finds the
//! connected top-to-bottom path with the least total gradient energy,
//! and that path is deleted from every row.  Repeat for as many seams
//! as requested.

extern crate image;

pub mod ternary;

pub mod gridmap;
pub use gridmap::GridMap;

pub mod grayscale;
pub use grayscale::to_grayscale;

pub mod energy;
pub use energy::{compute_energy, energy_to_image};

pub mod seam;
pub use seam::find_vertical_seam;

pub mod carver;
pub use carver::{remove_vertical_seam, Carver};

pub mod codec;

pub mod error;
pub use error::CarveError;
