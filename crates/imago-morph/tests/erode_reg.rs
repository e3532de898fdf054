//! Erosion regression test
//!
//! Reproduces the erosion vectors documented by image-js
//! (`src/image/morphology/__tests__/erode.js`) bit for bit:
//! grayscale minimum, binary AND, sequential iteration, a 1-wide vertical
//! element, and an element with a hole. Also checks the structural
//! properties: anti-extensivity of the default element, monotonic shrink
//! under iteration, and precondition rejections.
//!
//! Run with:
//! ```
//! cargo test -p imago-morph --test erode_reg
//! ```

use imago_core::{BitDepth, Raster, RasterKind};
use imago_morph::{MorphError, StructElement, erode, erode_default, erode_iter};
use imago_test::RegParams;

/// Build a binary raster from rows of '0'/'1' characters.
fn binary(rows: &[&str]) -> Raster {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let samples: Vec<u16> = rows
        .iter()
        .flat_map(|row| row.bytes().map(|b| (b - b'0') as u16))
        .collect();
    Raster::from_samples(width, height, RasterKind::Binary, BitDepth::Bit1, samples).unwrap()
}

fn grey8(width: u32, height: u32, samples: &[u16]) -> Raster {
    Raster::from_samples(width, height, RasterKind::Grey, BitDepth::Bit8, samples.to_vec())
        .unwrap()
}

/// Count foreground pixels in a binary raster.
fn count_foreground(raster: &Raster) -> u64 {
    raster.samples().iter().filter(|&&v| v != 0).count() as u64
}

/// Check that the foreground of `a` is a subset of the foreground of `b`.
fn foreground_subset(a: &Raster, b: &Raster) -> bool {
    a.samples()
        .iter()
        .zip(b.samples().iter())
        .all(|(&va, &vb)| va == 0 || vb != 0)
}

#[test]
fn erode_reg() {
    let mut rp = RegParams::new("erode");

    // -- Grayscale 5x5 with a zero column, default 3x3 element --
    #[rustfmt::skip]
    let grey = grey8(5, 5, &[
        255, 0, 255, 255, 255,
        255, 0, 255, 255, 255,
        255, 0, 255, 255, 255,
        255, 0, 255, 255, 255,
        255, 0, 255, 255, 255,
    ]);
    let out = erode_default(&grey).expect("grayscale erosion failed");
    #[rustfmt::skip]
    let expected: [u16; 25] = [
        0, 0, 0, 255, 255,
        0, 0, 0, 255, 255,
        0, 0, 0, 255, 255,
        0, 0, 0, 255, 255,
        0, 0, 0, 255, 255,
    ];
    rp.compare_buffers(&expected, out.samples());

    // -- Binary 5x5, default 3x3 element --
    let mask = binary(&["10111", "10111", "10111", "10111", "10111"]);
    let out = erode_default(&mask).expect("binary erosion failed");
    let expected = binary(&["00011", "00011", "00011", "00011", "00011"]);
    rp.compare_buffers(expected.samples(), out.samples());

    // -- Binary 5x5, two iterations --
    let sel = StructElement::brick(3, 3).unwrap();
    let out = erode_iter(&mask, &sel, 2).expect("iterated erosion failed");
    let expected = binary(&["00001", "00001", "00001", "00001", "00001"]);
    rp.compare_buffers(expected.samples(), out.samples());

    // -- 1-wide vertical element on a 3x5 raster --
    // Only vertical neighbors participate; horizontal structure is ignored.
    let sel = StructElement::from_rows(&[&[1], &[1], &[1]]).unwrap();
    let mask = binary(&["110", "100", "111", "001", "011"]);
    let out = erode(&mask, &sel).expect("vertical erosion failed");
    let expected = binary(&["100", "100", "000", "001", "001"]);
    rp.compare_buffers(expected.samples(), out.samples());

    // The transposed element gives the horizontal counterpart
    let sel = StructElement::from_rows(&[&[1, 1, 1]]).unwrap();
    let out = erode(&mask, &sel).expect("horizontal erosion failed");
    let expected = binary(&["100", "000", "111", "000", "001"]);
    rp.compare_buffers(expected.samples(), out.samples());

    // -- Element with a hole on a 5x5 raster with one background pixel --
    // The hole at the anchor means the center pixel itself never votes.
    let sel = StructElement::from_rows(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]]).unwrap();
    let mask = binary(&["11111", "11111", "11101", "11111", "11111"]);
    let out = erode(&mask, &sel).expect("hole-element erosion failed");
    let expected = binary(&["11111", "11000", "11010", "11000", "11111"]);
    rp.compare_buffers(expected.samples(), out.samples());

    assert!(rp.cleanup(), "erode regression test failed");
}

#[test]
fn erode_shrink_properties() {
    let mut rp = RegParams::new("erode_shrink");

    let mask = binary(&[
        "0111110",
        "0111110",
        "0111110",
        "0111110",
        "0111110",
    ]);
    let orig_count = count_foreground(&mask);
    eprintln!("Original foreground pixels: {}", orig_count);

    // Anti-extensive: the default element includes its anchor
    let eroded = erode_default(&mask).expect("erosion failed");
    rp.compare_bool(
        foreground_subset(&eroded, &mask),
        "erosion output must be a subset of the input foreground",
    );
    rp.compare_bool(
        count_foreground(&eroded) <= orig_count,
        "erosion must not increase foreground pixels",
    );

    // Monotonic shrink: each extra iteration keeps a subset
    let sel = StructElement::brick(3, 3).unwrap();
    let mut previous = mask.clone();
    for iterations in 1..=4 {
        let current = erode_iter(&mask, &sel, iterations).expect("iterated erosion failed");
        rp.compare_bool(
            foreground_subset(&current, &previous),
            "each iteration must shrink the foreground set",
        );
        previous = current;
    }

    // Iterating pass by pass equals asking for the iteration count directly
    let twice = erode(&erode(&mask, &sel).unwrap(), &sel).unwrap();
    let direct = erode_iter(&mask, &sel, 2).unwrap();
    rp.compare_buffers(twice.samples(), direct.samples());

    assert!(rp.cleanup(), "erode shrink properties failed");
}

#[test]
fn erode_asymmetric_iteration_is_sequential() {
    let mut rp = RegParams::new("erode_asymmetric");

    // An element with only a left-hand hit shifts influence rightward by
    // one pixel per pass; two passes reach two pixels, which no single
    // application of the same element can reproduce.
    let mut sel = StructElement::new(3, 1).unwrap();
    sel.set(0, 0, true);
    sel.set(1, 0, true);

    let mask = binary(&["01111111"]);
    let once = erode(&mask, &sel).expect("first pass failed");
    rp.compare_buffers(binary(&["00111111"]).samples(), once.samples());

    let twice = erode_iter(&mask, &sel, 2).expect("second pass failed");
    rp.compare_buffers(binary(&["00011111"]).samples(), twice.samples());

    assert!(rp.cleanup(), "asymmetric iteration test failed");
}

#[test]
fn erode_error_handling() {
    let mut rp = RegParams::new("erode_errors");

    // Multi-channel rasters are rejected before any processing
    let rgb = Raster::new(8, 8, RasterKind::Rgb, BitDepth::Bit8).unwrap();
    let result = erode_default(&rgb);
    rp.compare_bool(
        matches!(result, Err(MorphError::UnsupportedKind { .. })),
        "rgb raster must be rejected",
    );

    let rgba = Raster::new(8, 8, RasterKind::Rgba, BitDepth::Bit8).unwrap();
    rp.compare_bool(erode_default(&rgba).is_err(), "rgba raster must be rejected");

    // Malformed structuring elements are configuration errors
    rp.compare_bool(
        matches!(StructElement::new(0, 3), Err(MorphError::InvalidSel(_))),
        "zero-width element must be rejected",
    );
    rp.compare_bool(
        StructElement::from_rows(&[&[1, 1], &[1]]).is_err(),
        "ragged element rows must be rejected",
    );

    // 16-bit grayscale is accepted
    let grey16 = Raster::new(4, 4, RasterKind::Grey, BitDepth::Bit16).unwrap();
    rp.compare_bool(
        erode_default(&grey16).is_ok(),
        "16-bit grayscale must be accepted",
    );

    assert!(rp.cleanup(), "erode error handling test failed");
}
