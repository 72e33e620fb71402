//! Bilinear upsampling regression test
//!
//! Checks output geometry, placement of the source pixels, the closed
//! form on small rasters and exact reproduction of planes.

use subpel_core::{Raster, Sample};
use subpel_test::{RegParams, fixtures};
use subpel_transform::{TransformError, upsample_bilinear};

#[test]
fn bilinear_reg() {
    let mut rp = RegParams::new("bilinear");

    let pixs = fixtures::gradient(13, 9, 3);
    let (w, h) = pixs.dimensions();
    eprintln!("Image size: {}x{} channels={}", w, h, pixs.channels());

    // --- Test 1: output size and source placement ---
    for m in [1u32, 2, 3, 5] {
        let up = upsample_bilinear(&pixs, m).expect("bilinear");
        rp.compare_values(((w - 1) * m + 1) as f64, up.width() as f64, 0.0);
        rp.compare_values(((h - 1) * m + 1) as f64, up.height() as f64, 0.0);
        rp.compare_values(3.0, up.channels() as f64, 0.0);

        let misplaced = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| up.pixel(x * m, y * m) != pixs.pixel(x, y))
            .count();
        rp.compare_values(0.0, misplaced as f64, 0.0);
        eprintln!("  {}x: {}x{}", m, up.width(), up.height());
        rp.write_raster(&up).expect("write");
    }

    // --- Test 2: magnitude 1 is the identity ---
    let same = upsample_bilinear(&pixs, 1).expect("bilinear 1x");
    rp.compare_rasters(&pixs, &same);

    // --- Test 3: 2x2 worked example ---
    let small = Raster::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
    let expected = Raster::from_rows(&[[10u8, 15, 20], [20, 25, 30], [30, 35, 40]]).unwrap();
    let up = upsample_bilinear(&small, 2).expect("bilinear 2x2");
    rp.compare_rasters(&expected, &up);

    // --- Test 4: a plane is reproduced exactly ---
    let plane_data = (0..5)
        .flat_map(|y| (0..6).map(move |x| 3.0 * x as f64 + 5.0 * y as f64))
        .collect();
    let plane = Raster::from_data(6, 5, 1, plane_data).unwrap();
    let up = upsample_bilinear(&plane, 4).expect("bilinear plane");
    let mut worst = 0.0f64;
    for (x, y, px) in up.pixels() {
        let expected = 0.75 * x as f64 + 1.25 * y as f64;
        worst = worst.max((px[0] - expected).abs());
    }
    rp.compare_values(0.0, worst, 1e-9);

    // --- Test 5: uniform rasters stay uniform ---
    let color = Sample::new([77u8, 12, 200]);
    let flat = Raster::new_with_sample(5, 4, &color).unwrap();
    let up = upsample_bilinear(&flat, 3).expect("bilinear flat");
    rp.compare_rasters(&Raster::new_with_sample(13, 10, &color).unwrap(), &up);

    let flat_f = Raster::new_with_sample(4, 4, &Sample::new([0.3f32])).unwrap();
    let up = upsample_bilinear(&flat_f, 2).expect("bilinear flat f32");
    rp.compare_values(0.0, up.data().iter().filter(|&&v| v != 0.3).count() as f64, 0.0);

    // --- Test 6: single row and single column ---
    let row = Raster::from_rows(&[[0u16, 400, 800]]).unwrap();
    let up = upsample_bilinear(&row, 4).expect("bilinear row");
    rp.compare_values(9.0, up.width() as f64, 0.0);
    rp.compare_values(1.0, up.height() as f64, 0.0);
    rp.compare_values(300.0, up.pixel(3, 0).unwrap()[0] as f64, 0.0);

    let column = Raster::from_rows(&[[0u16], [400], [800]]).unwrap();
    let up = upsample_bilinear(&column, 4).expect("bilinear column");
    rp.compare_values(1.0, up.width() as f64, 0.0);
    rp.compare_values(9.0, up.height() as f64, 0.0);
    rp.compare_values(500.0, up.pixel(0, 5).unwrap()[0] as f64, 0.0);

    // --- Test 7: invalid input ---
    let zero = upsample_bilinear(&pixs, 0);
    rp.compare_values(
        1.0,
        matches!(zero, Err(TransformError::InvalidMagnitude { magnitude: 0, .. })) as u8 as f64,
        0.0,
    );
    let absent = upsample_bilinear(&Raster::<u8>::empty(3).unwrap(), 2);
    rp.compare_values(
        1.0,
        matches!(absent, Err(TransformError::InvalidInput(_))) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "bilinear regression test failed");
}
