//! Border regression test
//!
//! Checks the values synthesized by each border mode and that removing
//! a border restores the original raster.

use subpel_core::{BorderMode, Raster};
use subpel_test::{RegParams, fixtures};

fn value(r: &Raster<u8>, x: u32, y: u32) -> f64 {
    r.pixel(x, y).unwrap()[0] as f64
}

#[test]
fn border_reg() {
    let mut rp = RegParams::new("border");

    let pixs = Raster::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();

    // --- Test 1: replicate ---
    let rep = pixs.add_border(2, BorderMode::Replicate).expect("replicate");
    rp.compare_values(7.0, rep.width() as f64, 0.0);
    rp.compare_values(6.0, rep.height() as f64, 0.0);
    rp.compare_values(1.0, value(&rep, 0, 0), 0.0);
    rp.compare_values(6.0, value(&rep, 6, 5), 0.0);
    rp.compare_values(4.0, value(&rep, 0, 3), 0.0);
    rp.compare_values(3.0, value(&rep, 6, 1), 0.0);

    // --- Test 2: reflect ---
    let refl = pixs.add_border(1, BorderMode::Reflect).expect("reflect");
    rp.compare_values(5.0, value(&refl, 0, 0), 0.0);
    rp.compare_values(2.0, value(&refl, 4, 3), 0.0);
    rp.compare_values(1.0, value(&refl, 1, 1), 0.0);

    // --- Test 3: constant ---
    let cons = pixs.add_border(1, BorderMode::Constant(9)).expect("constant");
    rp.compare_values(9.0, value(&cons, 0, 0), 0.0);
    rp.compare_values(9.0, value(&cons, 4, 2), 0.0);
    rp.compare_values(1.0, value(&cons, 1, 1), 0.0);
    rp.compare_values(6.0, value(&cons, 3, 2), 0.0);

    // --- Test 4: add then remove restores the raster ---
    let back = rep.remove_border(2).expect("remove");
    rp.compare_rasters(&pixs, &back);

    let rgb = fixtures::gradient(10, 7, 3);
    let ext = rgb
        .add_border_general(1, 2, 0, 3, BorderMode::Replicate)
        .expect("general");
    rp.compare_values(13.0, ext.width() as f64, 0.0);
    rp.compare_values(10.0, ext.height() as f64, 0.0);
    rp.compare_values(1.0, (ext.pixel(0, 9) == rgb.pixel(0, 6)) as u8 as f64, 0.0);
    let back = ext.remove_border_general(1, 2, 0, 3).expect("remove general");
    rp.compare_rasters(&rgb, &back);

    // --- Test 5: invalid borders ---
    rp.compare_values(1.0, pixs.remove_border(1).is_err() as u8 as f64, 0.0);
    let absent = Raster::<u8>::empty(1).expect("empty raster");
    rp.compare_values(
        1.0,
        absent.add_border(1, BorderMode::Replicate).is_err() as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "border regression test failed");
}
