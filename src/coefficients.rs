use std::ops::{Index, IndexMut};

use crate::{COLOR_CHANNELS, SH_COUNT};

/// Fixed-length vector of SH coefficients, one per `(l, m)` pair.
///
/// Storage follows the usual flattening `l² + l + m`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShCoefficients([f32; SH_COUNT]);

impl ShCoefficients {
    pub fn from_array(values: [f32; SH_COUNT]) -> Self {
        Self(values)
    }

    /// Flat index of the `(l, m)` coefficient.
    pub fn flat_index(l: usize, m: isize) -> usize {
        debug_assert!(m.unsigned_abs() <= l);
        (l * l + l).wrapping_add_signed(m)
    }

    pub fn band(&self, level: usize) -> &[f32] {
        &self.0[level * level..=level * level + 2 * level]
    }

    pub fn band_mut(&mut self, level: usize) -> &mut [f32] {
        &mut self.0[level * level..=level * level + 2 * level]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    /// Euclidean norm of a single band.
    pub fn band_magnitude(&self, level: usize) -> f32 {
        self.band(level).iter().map(|v| v * v).sum::<f32>().sqrt()
    }
}

impl Index<usize> for ShCoefficients {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for ShCoefficients {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

/// SH coefficients of an RGB radiance function, one vector per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShColor([ShCoefficients; COLOR_CHANNELS]);

impl ShColor {
    /// RGB triple of the coefficient at flat index `k`.
    pub fn coefficient(&self, k: usize) -> glam::Vec3 {
        glam::Vec3::new(self.0[0][k], self.0[1][k], self.0[2][k])
    }

    pub fn channels(&self) -> &[ShCoefficients; COLOR_CHANNELS] {
        &self.0
    }
}

impl Index<usize> for ShColor {
    type Output = ShCoefficients;
    fn index(&self, c: usize) -> &ShCoefficients {
        &self.0[c]
    }
}

impl IndexMut<usize> for ShColor {
    fn index_mut(&mut self, c: usize) -> &mut ShCoefficients {
        &mut self.0[c]
    }
}
