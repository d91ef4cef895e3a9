use vb_core::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("File store error at {path}: {source} {location}")]
    FileStore {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::caller(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
