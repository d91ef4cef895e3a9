pub mod error;
pub mod file_store;
pub mod migration;
pub mod repositories;

pub use error::{DbError, Result};
pub use file_store::FileStore;
pub use migration::{ImportReport, import_file_store};
pub use repositories::vouch_repository::VouchRepository;
