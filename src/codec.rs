// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! File-format boundary: paths in, flat RGBA buffers out, and back.
//!
//! The carver itself never sees a file or an `image` container; it
//! works on a raw `Vec<u8>` plus dimensions.  Whatever pixel format
//! the source file uses is widened to RGBA on the way in.

use crate::error::CarveError;
use image::ColorType;
use std::path::Path;

/// Decode an image file into an interleaved RGBA buffer and its
/// dimensions.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, u32, u32), CarveError> {
    let path = path.as_ref();
    let rgba = image::open(path)
        .map_err(|cause| CarveError::Decode {
            path: path.to_owned(),
            cause,
        })?
        .to_rgba();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

/// Encode an interleaved RGBA buffer to the file named by `path`; the
/// format is inferred from the extension.
pub fn encode<P: AsRef<Path>>(
    path: P,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), CarveError> {
    let path = path.as_ref();
    image::save_buffer(path, pixels, width, height, ColorType::RGBA(8)).map_err(|cause| {
        CarveError::Encode {
            path: path.to_owned(),
            cause,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_preserves_pixels_and_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("two_by_one.png");
        let pixels = [10u8, 20, 30, 255, 40, 50, 60, 255];

        encode(&path, &pixels, 2, 1).unwrap();
        let (decoded, width, height) = decode(&path).unwrap();

        assert_eq!((width, height), (2, 1));
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = decode("definitely/not/here.png").unwrap_err();
        match err {
            CarveError::Decode { .. } => (),
            other => panic!("expected a decode error, got {}", other),
        }
    }

    #[test]
    fn unwritable_path_is_an_encode_error() {
        let err = encode("no/such/directory/out.png", &[0, 0, 0, 255], 1, 1).unwrap_err();
        match err {
            CarveError::Encode { .. } => (),
            other => panic!("expected an encode error, got {}", other),
        }
    }
}
