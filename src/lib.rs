pub mod io;
mod basis;
mod coefficients;
mod error;
mod filter;
mod mapping;
mod probe;
mod project;
mod reconstruct;

pub use basis::Evaluator;
pub use coefficients::{ShCoefficients, ShColor};
pub use error::Error;
pub use filter::{apply_band, Filter, FilterProfile};
pub use mapping::{map_pixel, pixels, Sample};
pub use probe::ProbeImage;
pub use project::{project, Projector};
pub use reconstruct::{reconstruct, Reconstructor};

pub const SH_ORDER: usize = 3;
pub const SH_COUNT: usize = SH_ORDER * SH_ORDER;

/// Number of colour channels carried by an [`ShColor`].
pub const COLOR_CHANNELS: usize = 3;

/// SH order and windowing shared by the projector, filter and reconstructor.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionParameters {
    pub order: usize,
    pub filter: FilterProfile,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            order: SH_ORDER,
            filter: FilterProfile::Disable,
        }
    }
}
