use approx::assert_relative_eq;
use blade_shprobe as shp;

/// Sky-like probe: bright towards +Z, warmer towards +X.
fn sky(width: usize) -> shp::ProbeImage {
    let mut img = shp::ProbeImage::new(width, 3).unwrap();
    for (row, col, sample) in shp::pixels(width) {
        let d = sample.direction;
        let up = d.z.max(0.0);
        img.pixel_mut(row, col)
            .copy_from_slice(&[0.2 + up + 0.5 * d.x.max(0.0), 0.2 + up, 0.3 + 0.8 * up]);
    }
    img
}

#[test]
fn disable_matches_plain_integration() {
    let width = 32;
    let img = sky(width);
    let evaluator = shp::Evaluator::new(shp::SH_ORDER).unwrap();

    let mut expected = shp::ShColor::default();
    for row in 0..width {
        for col in 0..width {
            let Some(sample) = shp::map_pixel(row, col, width) else {
                continue;
            };
            if sample.solid_angle <= 0.0 {
                continue;
            }
            let basis = evaluator.evaluate(sample.direction);
            let color = img.pixel(row, col);
            for c in 0..3 {
                for k in 0..shp::SH_COUNT {
                    expected[c][k] += basis[k] * color[c] * sample.solid_angle;
                }
            }
        }
    }

    let sh = shp::project(shp::FilterProfile::Disable, &img).unwrap();
    assert_eq!(sh, expected);
}

#[test]
fn gaussian_attenuates_higher_bands() {
    let img = sky(64);
    let plain = shp::project(shp::FilterProfile::Disable, &img).unwrap();
    let smooth = shp::project(shp::FilterProfile::Gaussian, &img).unwrap();
    let filter = shp::Filter::new(shp::FilterProfile::Gaussian, shp::SH_ORDER).unwrap();

    for c in 0..3 {
        assert_eq!(smooth[c][0], plain[c][0]);
        for level in 1..shp::SH_ORDER {
            let before = plain[c].band_magnitude(level) / plain[c][0];
            let after = smooth[c].band_magnitude(level) / smooth[c][0];
            assert!(before > 1e-3, "band {} of channel {} is empty", level, c);
            assert!(after < before);
            assert_relative_eq!(after, before * filter.gain(level), max_relative = 1e-3);
        }
    }
}

#[test]
fn every_filter_keeps_a_constant_probe() {
    let width = 64;
    let k = 1.5;
    let img = shp::ProbeImage::from_raw(width, width, 3, vec![k; width * width * 3]).unwrap();
    for filter in [
        shp::FilterProfile::Disable,
        shp::FilterProfile::Gaussian,
        shp::FilterProfile::Hanning,
        shp::FilterProfile::Lanczos,
    ] {
        let sh = shp::project(filter, &img).unwrap();
        let rec = shp::Reconstructor::new(shp::SH_ORDER).unwrap();
        for (_, _, sample) in shp::pixels(width) {
            let color = rec.evaluate(&sh, sample.direction);
            for v in color.to_array() {
                assert_relative_eq!(v, k, epsilon = 2e-2);
            }
        }
    }
}

#[test]
fn reconstruction_is_band_limited() {
    let width = 64;
    let img = sky(width);
    let sh = shp::project(shp::FilterProfile::Disable, &img).unwrap();
    let mut rec = shp::ProbeImage::new(width, 3).unwrap();
    shp::reconstruct(&mut rec, &sh).unwrap();

    // the kink at the horizon cannot be represented exactly, the overall
    // brightness must be
    let mut total_src = 0.0;
    let mut total_rec = 0.0;
    let mut max_err = 0.0f32;
    for (row, col, sample) in shp::pixels(width) {
        let (a, b) = (img.pixel(row, col)[1], rec.pixel(row, col)[1]);
        total_src += a * sample.solid_angle;
        total_rec += b * sample.solid_angle;
        max_err = max_err.max((a - b).abs());
    }
    assert!(max_err > 1e-3);
    assert_relative_eq!(total_src, total_rec, max_relative = 1e-2);
}
