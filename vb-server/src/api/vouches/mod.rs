pub mod create_vouch_request;
pub mod vouches;
