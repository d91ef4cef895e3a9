pub mod vouch_repository;
