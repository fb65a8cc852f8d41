use thiserror::Error;

use crate::client::TransportError;

#[derive(Error, Debug)]
pub enum RealcheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Classification request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("No image selected")]
    NoImageSelected,
}

pub type Result<T> = std::result::Result<T, RealcheckError>;
