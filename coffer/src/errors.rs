use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Upload rejected by a validation rule. Raised before storage is
    /// attempted; never leaves partial state on disk.
    #[error("{message}")]
    Validation { message: String },

    /// I/O or codec failure while persisting an upload. Within one
    /// multi-file save, artifacts stored by earlier iterations are not
    /// rolled back.
    #[error("{message}")]
    Storage { message: String },

    /// Configuration could not be loaded or parsed
    #[error(transparent)]
    Config(#[from] figment::Error),
}

impl Error {
    /// True for failures raised before any bytes were written
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// True for failures that may have left artifacts on disk
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage { message: err.to_string() }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Storage {
            message: format!("invalid base64 payload: {err}"),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Storage { message: err.to_string() }
    }
}

/// Type alias for upload operation results
pub type Result<T> = std::result::Result<T, Error>;
