//! Configuration management for repokit
//!
//! Configuration is merged from several sources, later ones winning:
//!
//! 1. Hardcoded defaults
//! 2. `<project>/repokit.toml`
//! 3. An explicit file passed with `--config`
//! 4. Environment variables (`REPOKIT_` prefix)
//!
//! # Example Configuration
//!
//! ```toml
//! # repokit.toml
//! root_namespace = "Acme"
//! app_dir = "src"
//! repository_namespace = "Repositories"
//! stub_path = "stubs/repository.stub"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Project configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "repokit.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REPOKIT_";

/// Sentinel model reference meaning "no model specified"
pub const DEFAULT_MODEL: &str = r"App\Your\Model";

/// Scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepokitConfig {
    /// Application root namespace
    pub root_namespace: String,

    /// Directory the root namespace maps to, relative to the project root
    pub app_dir: PathBuf,

    /// Namespace segment appended to the root namespace for repositories
    pub repository_namespace: String,

    /// Override stub, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stub_path: Option<PathBuf>,

    /// Sentinel model reference used when `--model` is not given
    pub default_model: String,
}

impl Default for RepokitConfig {
    fn default() -> Self {
        Self {
            root_namespace: "App".to_string(),
            app_dir: PathBuf::from("app"),
            repository_namespace: "Repositories".to_string(),
            stub_path: None,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl RepokitConfig {
    /// Load configuration for a project root
    ///
    /// # Errors
    ///
    /// Returns an error if `repokit.toml` exists but cannot be parsed, or if
    /// an environment override has the wrong type.
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(project_root, None)
    }

    /// Load configuration with an optional explicit file on top of the project file
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any layer fails
    /// to parse or extract.
    pub fn load_with(
        project_root: impl AsRef<Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let project_config = project_root.as_ref().join(CONFIG_FILE);
        if project_config.exists() {
            tracing::debug!(path = %project_config.display(), "loading project configuration");
            figment = figment.merge(Toml::file(&project_config));
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            tracing::debug!(path = %path.display(), "loading explicit configuration");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Namespace repositories are generated into, e.g. `App\Repositories`
    #[must_use]
    pub fn repository_namespace(&self) -> String {
        let root = self.root_namespace.trim_matches('\\');
        let segment = self.repository_namespace.trim_matches('\\');
        if segment.is_empty() {
            root.to_string()
        } else {
            format!(r"{root}\{segment}")
        }
    }
}
