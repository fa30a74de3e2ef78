//! CLI command implementations

pub mod make_repository;

pub use make_repository::MakeRepositoryCommand;
