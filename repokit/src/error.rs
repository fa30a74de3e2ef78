//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Result type for repository proxy calls.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type for model method calls.
pub type ModelResult<T> = Result<T, ModelError>;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Defaults could not be serialized into the base layer.
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// A provider failed to load or the merged values failed to extract.
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Errors raised while generating a repository class.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A required argument was empty or not supplied.
    #[error("Missing required argument {0}")]
    MissingArgument(&'static str),

    /// The class name has a segment that is not a valid identifier.
    #[error("Invalid class name {0}: every segment must be a valid identifier")]
    InvalidClassName(String),

    /// The target file is already present; nothing was written.
    #[error("{kind} already exists! ({})", path.display())]
    AlreadyExists {
        /// Kind of class being generated
        kind: &'static str,
        /// Resolved target path
        path: PathBuf,
    },

    /// A placeholder token survived rendering.
    #[error("unresolved placeholder in rendered stub: {0}")]
    UnresolvedPlaceholder(String),

    /// The override stub could not be read.
    #[error("failed to read stub {}: {source}", path.display())]
    Stub {
        /// Stub location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure while creating directories or writing.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors produced by a model's own methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The model exposes no method with this name.
    #[error("method {model}::{method} does not exist")]
    UnknownMethod {
        /// Model class name
        model: String,
        /// Requested method
        method: String,
    },

    /// The method exists but rejected its arguments.
    #[error("invalid arguments for {method}: {reason}")]
    InvalidArguments {
        /// Method name
        method: String,
        /// Why the arguments were rejected
        reason: String,
    },

    /// Query failure reported by the model.
    #[error("query failed: {0}")]
    Query(String),
}

impl ModelError {
    /// Build a [`ModelError::UnknownMethod`]
    pub fn unknown_method(model: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            model: model.into(),
            method: method.into(),
        }
    }
}

/// Errors raised by the repository proxy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A call reached the proxy while no model was bound.
    #[error("no model bound to repository")]
    NoModelBound,

    /// Error returned by the wrapped model, passed through unchanged.
    #[error(transparent)]
    Model(#[from] ModelError),
}
