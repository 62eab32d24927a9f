use std::{
    fs,
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
};

use crate::{Error, ProbeImage};

pub(super) fn is_compressed(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// `probe.hdr.gz` -> `probe.hdr`, used to pick the inner format.
fn inner_path(path: &Path) -> PathBuf {
    path.with_extension("")
}

pub(super) fn load(path: &Path) -> Result<ProbeImage, Error> {
    let file = fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_error = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    flate2::read::GzDecoder::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?;
    log::debug!("Inflated {:?} to {} bytes", path, bytes.len());

    let format = image::ImageFormat::from_path(inner_path(path)).map_err(decode_error)?;
    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(decode_error)?;
    super::codec::to_probe(decoded)
}

pub(super) fn save(path: &Path, width: usize, rgb: &[f32]) -> Result<(), Error> {
    let format = super::codec::output_format(&inner_path(path))?;
    let mut encoded = io::Cursor::new(Vec::new());
    super::codec::encode(&mut encoded, path, format, width, rgb)?;

    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(io_error)?;
    let mut gz = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    gz.write_all(encoded.get_ref()).map_err(io_error)?;
    gz.finish().map_err(io_error)?;
    Ok(())
}
