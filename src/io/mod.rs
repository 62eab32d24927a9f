//! Loading and saving probe images.
//!
//! Any format understood by the `image` crate is accepted on input. Files
//! ending in `.gz` are inflated first and decoded according to the extension
//! that remains (`probe.hdr.gz` is a gzip-compressed Radiance file).

use std::path::Path;

use crate::{Error, ProbeImage, COLOR_CHANNELS};

mod codec;
mod gz;

pub fn load(path: impl AsRef<Path>) -> Result<ProbeImage, Error> {
    let path = path.as_ref();
    let image = if gz::is_compressed(path) {
        gz::load(path)?
    } else {
        codec::load(path)?
    };
    log::info!(
        "Loaded {:?}: {}x{} with {} channels",
        path,
        image.width(),
        image.width(),
        image.depth()
    );
    Ok(image)
}

/// Writes the first three channels of `image` as an RGB float image.
pub fn save(path: impl AsRef<Path>, image: &ProbeImage) -> Result<(), Error> {
    let path = path.as_ref();
    let rgb = codec::rgb_pixels(image)?;
    if gz::is_compressed(path) {
        gz::save(path, image.width(), &rgb)?;
    } else {
        codec::save(path, image.width(), &rgb)?;
    }
    log::info!(
        "Saved {:?}: {}x{} with {} channels",
        path,
        image.width(),
        image.width(),
        COLOR_CHANNELS
    );
    Ok(())
}
