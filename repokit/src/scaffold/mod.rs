//! Repository class scaffolding
//!
//! Renders the repository stub for a class name and model reference:
//! - `naming` resolves class names, namespaces, paths and table names
//! - `stub` holds the built-in stub and its placeholder tokens
//! - `generator` substitutes the tokens and writes the file

pub mod generator;
pub mod naming;
pub mod stub;

pub use generator::{RenderedSource, RepositoryGenerator, ScaffoldRequest, KIND};
pub use naming::NameHelpers;
pub use stub::{StubSource, REPOSITORY_STUB};
