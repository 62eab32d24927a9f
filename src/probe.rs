use crate::Error;

/// Square light-probe image, `width × width` pixels of `depth` interleaved
/// `f32` channels in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeImage {
    width: usize,
    depth: usize,
    data: Vec<f32>,
}

impl ProbeImage {
    /// Black probe of the given geometry.
    pub fn new(width: usize, depth: usize) -> Result<Self, Error> {
        Self::from_raw(width, width, depth, vec![0.0; width * width * depth])
    }

    pub fn from_raw(
        width: usize,
        height: usize,
        depth: usize,
        data: Vec<f32>,
    ) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidGeometry {
            width,
            height,
            depth,
            reason,
        };
        if width != height {
            return Err(invalid("probe must be square"));
        }
        if width == 0 || depth == 0 {
            return Err(invalid("probe is empty"));
        }
        if data.len() != width * height * depth {
            return Err(invalid("pixel buffer size does not match"));
        }
        Ok(Self { width, depth, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.width && col < self.width,
            "pixel ({}, {}) is outside of a {}x{} probe",
            row,
            col,
            self.width,
            self.width
        );
        (row * self.width + col) * self.depth
    }

    pub fn pixel(&self, row: usize, col: usize) -> &[f32] {
        let offset = self.offset(row, col);
        &self.data[offset..offset + self.depth]
    }

    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [f32] {
        let offset = self.offset(row, col);
        &mut self.data[offset..offset + self.depth]
    }

    /// Checks the probe carries at least `channels` channels.
    pub(crate) fn require_channels(&self, channels: usize) -> Result<(), Error> {
        if self.depth < channels {
            return Err(Error::InvalidGeometry {
                width: self.width,
                height: self.width,
                depth: self.depth,
                reason: "not enough color channels",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square() {
        let err = ProbeImage::from_raw(4, 2, 3, vec![0.0; 24]).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { width: 4, height: 2, .. }));
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(ProbeImage::from_raw(2, 2, 3, vec![0.0; 11]).is_err());
        assert!(ProbeImage::new(0, 3).is_err());
    }

    #[test]
    fn pixel_layout_is_row_major() {
        let data = (0..2 * 2 * 3).map(|v| v as f32).collect();
        let mut img = ProbeImage::from_raw(2, 2, 3, data).unwrap();
        assert_eq!(img.pixel(0, 1), &[3.0, 4.0, 5.0]);
        assert_eq!(img.pixel(1, 0), &[6.0, 7.0, 8.0]);
        img.pixel_mut(1, 1)[2] = -1.0;
        assert_eq!(img.data()[11], -1.0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_pixel_panics() {
        let img = ProbeImage::new(2, 3).unwrap();
        let _ = img.pixel(0, 2);
    }
}
