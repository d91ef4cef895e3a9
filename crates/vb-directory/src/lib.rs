pub mod avatar;
pub mod client;
pub mod error;
pub mod profile;
pub mod resolver;

pub use client::DirectoryClient;
pub use error::{DirectoryError, Result};
pub use profile::DirectoryProfile;
pub use resolver::IdentityResolver;
