use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid probe geometry {width}x{height}x{depth}: {reason}")]
    InvalidGeometry {
        width: usize,
        height: usize,
        depth: usize,
        reason: &'static str,
    },
    #[error("SH order {order} is not supported")]
    UnsupportedOrder { order: usize },
    #[error("failed to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode image {path:?}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
