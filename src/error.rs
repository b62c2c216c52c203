//! Common error types.

use std::fmt;

/// A shortcut type equivalent to `Result<T, hue_wheel::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// The wheel configuration cannot describe a ring, i.e. the thickness is not positive or the
    /// inner radius is negative or not finite.
    InvalidConfig(String),

    /// A buffer received data incompatible with the dimensions it is supposed to hold.
    ///
    /// `received` is the length of the data in bytes.
    IncompatibleImageData {
        width: u32,
        height: u32,
        received: usize,
    },

    /// Failed to encode an image.
    EncodingError(String),

    /// Tried to encode an empty image, or an image without data.
    EmptyImageError,

    /// An error occured when trying to write to a file.
    IoError(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid wheel configuration: {msg}"),
            Self::IncompatibleImageData {
                width,
                height,
                received,
            } => write!(
                f,
                "A buffer with dimensions {width}x{height} should have {} bytes, received {received} instead",
                *width as usize * *height as usize * 4,
            ),
            Self::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            Self::EmptyImageError => write!(f, "Tried encoding an empty image"),
            Self::IoError(error) => write!(f, "IO error: {error}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

#[cfg(feature = "png")]
impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::IoError(err),
            png::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
            png::EncodingError::LimitsExceeded => {
                Self::EncodingError("limits exceeded".to_string())
            }
            png::EncodingError::Parameter(err) => Self::EncodingError(err.to_string()),
        }
    }
}
