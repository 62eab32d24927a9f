//! Angular map ("light probe") parameterization of the sphere.
//!
//! The probe disc is inscribed in a square image. The distance from the centre
//! maps linearly to the polar angle, so the centre looks along +Z and the rim
//! of the disc along -Z.

use std::f32::consts::PI;

/// A pixel of the probe disc, seen as a direction on the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub direction: glam::Vec3,
    pub solid_angle: f32,
}

fn sinc(x: f32) -> f32 {
    if x.abs() < 1.0e-4 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Maps pixel `(row, col)` of a `width`-wide probe to its direction and
/// solid angle, or `None` if the pixel lies outside the disc.
pub fn map_pixel(row: usize, col: usize, width: usize) -> Option<Sample> {
    let half = width as f32 / 2.0;
    let v = (half - row as f32) / half;
    let u = (col as f32 - half) / half;
    let r = (u * u + v * v).sqrt();
    if r > 1.0 {
        return None;
    }

    let theta = PI * r;
    let phi = v.atan2(u);
    let direction = glam::Vec3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    );
    // Approximates sin(theta) dtheta dphi in terms of the pixel footprint.
    let step = 2.0 * PI / width as f32;
    // On the rim (r == 1) sin(PI) rounds slightly below zero in f32.
    let solid_angle = step * step * sinc(theta);

    Some(Sample {
        direction,
        solid_angle,
    })
}

/// Iterates all in-disc pixels of a `width`-wide probe in row-major order.
pub fn pixels(width: usize) -> impl Iterator<Item = (usize, usize, Sample)> {
    (0..width).flat_map(move |row| {
        (0..width).filter_map(move |col| map_pixel(row, col, width).map(|s| (row, col, s)))
    })
}
