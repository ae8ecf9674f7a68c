// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line seam carver.
//!
//! `pngcarve INPUT OUTPUT SEAMS` removes SEAMS vertical seams from the
//! image at INPUT and writes the narrowed result to OUTPUT.  Each
//! error class gets its own exit code so scripts can tell them apart:
//! 1 for bad arguments, 2 for a decode failure, 3 for an encode
//! failure, 4 when the image has too few columns for the request.

use pngcarve::carver::Carver;
use pngcarve::energy::{compute_energy, energy_to_image};
use pngcarve::grayscale::to_grayscale;
use pngcarve::{codec, CarveError};

extern crate clap;

use clap::{App, Arg};
use std::process;

const EXIT_USAGE: i32 = 1;
const EXIT_DECODE: i32 = 2;
const EXIT_ENCODE: i32 = 3;
const EXIT_GEOMETRY: i32 = 4;

fn fail(error: &CarveError, code: i32) -> ! {
    eprintln!("pngcarve: {}", error);
    process::exit(code)
}

fn main() {
    let matches = App::new("pngcarve")
        .version("0.1.0")
        .about("Content-aware image width reduction by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("seams")
                .help("How many vertical seams to remove")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("PATH")
                .help("Also write the initial energy map as a grayscale image")
                .takes_value(true),
        )
        .get_matches();

    let seams = match matches.value_of("seams").unwrap().parse::<u32>() {
        Ok(count) => count,
        Err(_) => {
            eprintln!("pngcarve: SEAMS must be a non-negative integer");
            process::exit(EXIT_USAGE);
        }
    };
    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();

    let (pixels, width, height) = match codec::decode(input) {
        Ok(decoded) => decoded,
        Err(error) => fail(&error, EXIT_DECODE),
    };

    if let Some(path) = matches.value_of("energy") {
        let energy = compute_energy(&to_grayscale(&pixels, width, height));
        if let Err(cause) = energy_to_image(&energy).save(path) {
            fail(
                &CarveError::Encode {
                    path: path.into(),
                    cause,
                },
                EXIT_ENCODE,
            );
        }
    }

    let mut carver = match Carver::new(pixels, width, height) {
        Ok(carver) => carver,
        Err(error) => fail(&error, EXIT_GEOMETRY),
    };
    if let Err(error) = carver.carve(seams) {
        fail(&error, EXIT_GEOMETRY);
    }

    if let Err(error) = codec::encode(output, carver.as_raw(), carver.width(), carver.height()) {
        fail(&error, EXIT_ENCODE);
    }
}
