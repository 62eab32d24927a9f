use crate::{mapping, Error, Evaluator, ProbeImage, ShColor, COLOR_CHANNELS, SH_ORDER};

/// Evaluates a truncated SH series, per direction or over a whole probe.
pub struct Reconstructor {
    evaluator: Evaluator,
}

impl Reconstructor {
    pub fn new(order: usize) -> Result<Self, Error> {
        Ok(Self {
            evaluator: Evaluator::new(order)?,
        })
    }

    pub fn evaluate(&self, sh: &ShColor, direction: glam::Vec3) -> glam::Vec3 {
        let basis = self.evaluator.evaluate(direction);
        let mut color = [0.0f32; COLOR_CHANNELS];
        for (value, channel) in color.iter_mut().zip(sh.channels()) {
            for (c, b) in channel.iter().zip(basis.iter()) {
                *value += c * b;
            }
        }
        glam::Vec3::from(color)
    }

    /// Writes the series into the first three channels of every in-disc
    /// pixel. Everything else in `image` is left untouched.
    pub fn reconstruct_image(&self, image: &mut ProbeImage, sh: &ShColor) -> Result<(), Error> {
        image.require_channels(COLOR_CHANNELS)?;
        log::info!(
            "Reconstructing {}x{} probe from order {} SH",
            image.width(),
            image.width(),
            self.evaluator.order()
        );
        for (row, col, sample) in mapping::pixels(image.width()) {
            let color = self.evaluate(sh, sample.direction);
            image.pixel_mut(row, col)[..COLOR_CHANNELS].copy_from_slice(&color.to_array());
        }
        Ok(())
    }
}

/// Reconstructs into `image` at the default SH order.
pub fn reconstruct(image: &mut ProbeImage, sh: &ShColor) -> Result<(), Error> {
    Reconstructor::new(SH_ORDER)?.reconstruct_image(image, sh)
}
