use std::path::Path;

use crate::{Error, ProbeImage, COLOR_CHANNELS};

/// Converts a decoded image into a probe, keeping its channel count.
pub(super) fn to_probe(image: image::DynamicImage) -> Result<ProbeImage, Error> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let (depth, data) = match image.color().channel_count() {
        1 => (1, image.to_luma32f().into_raw()),
        2 => (2, image.to_luma_alpha32f().into_raw()),
        3 => (3, image.to_rgb32f().into_raw()),
        _ => (4, image.to_rgba32f().into_raw()),
    };
    ProbeImage::from_raw(width, height, depth, data)
}

pub(super) fn load(path: &Path) -> Result<ProbeImage, Error> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let decoded = image::ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    to_probe(decoded)
}

/// Interleaved RGB pixels of the probe, dropping any further channels.
pub(super) fn rgb_pixels(image: &ProbeImage) -> Result<Vec<f32>, Error> {
    image.require_channels(COLOR_CHANNELS)?;
    if image.depth() == COLOR_CHANNELS {
        return Ok(image.data().to_vec());
    }
    log::debug!(
        "Dropping {} extra channels on save",
        image.depth() - COLOR_CHANNELS
    );
    Ok(image
        .data()
        .chunks_exact(image.depth())
        .flat_map(|px| px[..COLOR_CHANNELS].iter().copied())
        .collect())
}

pub(super) fn output_format(path: &Path) -> Result<image::ImageFormat, Error> {
    image::ImageFormat::from_path(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes square RGB float pixels into `writer`.
pub(super) fn encode<W: std::io::Write + std::io::Seek>(
    writer: &mut W,
    path: &Path,
    format: image::ImageFormat,
    width: usize,
    rgb: &[f32],
) -> Result<(), Error> {
    image::write_buffer_with_format(
        writer,
        bytemuck::cast_slice(rgb),
        width as u32,
        width as u32,
        image::ExtendedColorType::Rgb32F,
        format,
    )
    .map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn save(path: &Path, width: usize, rgb: &[f32]) -> Result<(), Error> {
    let format = output_format(path)?;
    let file = std::fs::File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    encode(&mut writer, path, format, width, rgb)
}
