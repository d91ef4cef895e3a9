pub mod error;
pub mod migrate;
pub mod summary;
pub mod vouches;
