pub mod identity;
pub mod vouch;
