use vb_core::ErrorLocation;

use thiserror::Error;

/// Lookup failures stay inside this crate: the resolver logs them and
/// degrades to a synthetic identity instead of propagating.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP error: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Unexpected status {status} from directory {location}")]
    UnexpectedStatus {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Malformed directory response: {source} {location}")]
    MalformedBody {
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::caller(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
