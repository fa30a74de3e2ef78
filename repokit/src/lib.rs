//! repokit: repository classes for ORM models
//!
//! Two collaborating parts:
//! - **scaffold**: renders the repository stub for a class name and model
//!   reference and writes it to the conventional location under the
//!   application directory
//! - **proxy**: a repository wrapper that forwards unknown calls to the model
//!   it holds, and binds the model plus its table name before running its own
//!   override methods
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use repokit::config::RepokitConfig;
//! use repokit::filesystem::LocalFilesystem;
//! use repokit::scaffold::{RepositoryGenerator, ScaffoldRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RepokitConfig::load(".")?;
//! let fs = LocalFilesystem::new(".");
//! let generator = RepositoryGenerator::new(&config);
//!
//! let request = ScaffoldRequest::new("userProfile", None, &config)?;
//! let rendered = generator.generate(&request, &fs)?;
//! println!("wrote {}", rendered.path.display());
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod filesystem;
pub mod observability;
pub mod proxy;
pub mod scaffold;

pub use error::{
    ConfigError, ModelError, ModelResult, RepositoryError, RepositoryResult, ScaffoldError,
    ScaffoldResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::RepokitConfig;
    pub use crate::error::{
        ConfigError, ModelError, ModelResult, RepositoryError, RepositoryResult, ScaffoldError,
        ScaffoldResult,
    };
    pub use crate::filesystem::{Filesystem, LocalFilesystem};
    pub use crate::proxy::{MethodTable, Model, Repository};
    pub use crate::scaffold::{RenderedSource, RepositoryGenerator, ScaffoldRequest};
}
