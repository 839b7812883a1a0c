use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("malformed color code '{0}': expected 6 hex digits")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("no materials to rasterize")]
    Empty,

    #[error("source index {index} out of range for {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("creating {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding PNG {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

/// Failure of a single metadata-to-texture conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Meta(#[from] MetaError),

    #[error("no materials found in {0}")]
    NoMaterials(PathBuf),

    #[error("{path}: {source}")]
    Raster {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
