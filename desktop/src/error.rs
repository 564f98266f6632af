use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: {program} IMAGEFILE")]
    Usage { program: String },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("{0}")]
    Validation(#[from] st7565_core::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
