pub mod migrate;
pub mod migrate_response;
