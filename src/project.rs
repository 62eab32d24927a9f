use crate::{
    mapping, Error, Evaluator, Filter, FilterProfile, ProbeImage, ProjectionParameters,
    ShColor, COLOR_CHANNELS, SH_COUNT, SH_ORDER,
};

/// Integrates probe radiance against the SH basis.
pub struct Projector {
    evaluator: Evaluator,
    filter: Filter,
}

impl Projector {
    pub fn new(params: &ProjectionParameters) -> Result<Self, Error> {
        Ok(Self {
            evaluator: Evaluator::new(params.order)?,
            filter: Filter::new(params.filter, params.order)?,
        })
    }

    /// Weighted, filtered basis contribution of a single in-disc pixel.
    ///
    /// Depends on nothing but its arguments, so pixels can be processed in
    /// any order and partial sums merged afterwards.
    pub fn pixel_contribution(&self, sample: &mapping::Sample, color: &[f32]) -> ShColor {
        let mut basis = self.evaluator.evaluate(sample.direction);
        self.filter.apply(&mut basis);

        let mut out = ShColor::default();
        for c in 0..COLOR_CHANNELS {
            for k in 0..SH_COUNT {
                out[c][k] = basis[k] * color[c] * sample.solid_angle;
            }
        }
        out
    }

    pub fn project(&self, image: &ProbeImage) -> Result<ShColor, Error> {
        image.require_channels(COLOR_CHANNELS)?;
        log::info!(
            "Projecting {}x{} probe onto order {} SH with {} filter",
            image.width(),
            image.width(),
            self.evaluator.order(),
            self.filter.profile()
        );

        let mut sh = ShColor::default();
        let mut count = 0usize;
        for (row, col, sample) in mapping::pixels(image.width()) {
            // rim samples carry a zero or slightly negative weight
            if sample.solid_angle <= 0.0 {
                continue;
            }
            let contribution = self.pixel_contribution(&sample, image.pixel(row, col));
            accumulate(&mut sh, &contribution);
            count += 1;
        }
        log::debug!("Integrated {} in-disc pixels", count);
        Ok(sh)
    }
}

fn accumulate(sum: &mut ShColor, contribution: &ShColor) {
    for c in 0..COLOR_CHANNELS {
        for k in 0..SH_COUNT {
            sum[c][k] += contribution[c][k];
        }
    }
}

/// Projects `image` at the default SH order.
pub fn project(filter: FilterProfile, image: &ProbeImage) -> Result<ShColor, Error> {
    Projector::new(&ProjectionParameters {
        order: SH_ORDER,
        filter,
    })?
    .project(image)
}
