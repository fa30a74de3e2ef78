//! Repository stub and its placeholder tokens

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::config::RepokitConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::filesystem::Filesystem;

/// Conventional location of a project-level stub override
pub const PROJECT_STUB_PATH: &str = "stubs/repository.stub";

/// Spellings of the class name placeholder
pub const CLASS_TOKENS: &[&str] = &["DummyClass", "{{ class }}", "{{class}}"];

/// Spellings of the namespace placeholder
pub const NAMESPACE_TOKENS: &[&str] = &["DummyNamespace", "{{ namespace }}", "{{namespace}}"];

/// Spellings of the root namespace placeholder
pub const ROOT_NAMESPACE_TOKENS: &[&str] =
    &["DummyRootNamespace", "{{ rootNamespace }}", "{{rootNamespace}}"];

/// Replaced with the model reference exactly as given
pub const MODEL_NAMESPACE_TOKEN: &str = "[model_namespace]";

/// Reminder slot above the model `use` line
pub const COMMENT_NAMESPACE_TOKEN: &str = "[comment_namespace_when_no_model]";

/// Reminder slot above the model assignment
pub const COMMENT_MODEL_TOKEN: &str = "[comment_when_no_model]";

/// Replaced with the bare model class name
pub const MODEL_TOKEN: &str = "[model]";

/// Comment emitted when the model namespace still needs editing
pub const NAMESPACE_REMINDER: &str = "// Don't forget to update the model's namespace";

/// Comment emitted when the model name still needs editing
pub const MODEL_REMINDER: &str = "// Don't forget to update the model's name";

/// Comment emitted when a model was supplied
pub const SETUP_COMMENT: &str = "// setup the model";

/// Built-in repository stub
pub const REPOSITORY_STUB: &str = r"<?php

namespace {{ namespace }};

[comment_namespace_when_no_model]
use [model_namespace];
use Repokit\Repository;

class {{ class }}
{
    use Repository;

    /**
     * The model being queried.
     *
     * @var \Illuminate\Database\Eloquent\Model
     */
    protected $model;

    /**
     * Constructor
     */
    public function __construct()
    {
        [comment_when_no_model]
        $this->model = app([model]::class);
    }
}
";

/// Every placeholder token a stub may contain
pub fn all_tokens() -> impl Iterator<Item = &'static str> {
    CLASS_TOKENS
        .iter()
        .chain(NAMESPACE_TOKENS)
        .chain(ROOT_NAMESPACE_TOKENS)
        .copied()
        .chain([
            MODEL_NAMESPACE_TOKEN,
            COMMENT_NAMESPACE_TOKEN,
            COMMENT_MODEL_TOKEN,
            MODEL_TOKEN,
        ])
}

/// Where the stub text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// [`REPOSITORY_STUB`]
    BuiltIn,
    /// A stub file, relative to the project root
    File(PathBuf),
}

impl StubSource {
    /// Pick the stub for a project
    ///
    /// A configured `stub_path` wins, then `stubs/repository.stub` if the
    /// project has one, then the built-in stub.
    pub fn resolve(config: &RepokitConfig, fs: &dyn Filesystem) -> Self {
        if let Some(path) = &config.stub_path {
            return Self::File(path.clone());
        }

        let project_stub = Path::new(PROJECT_STUB_PATH);
        if fs.exists(project_stub) {
            Self::File(project_stub.to_path_buf())
        } else {
            Self::BuiltIn
        }
    }

    /// Read the stub text
    pub fn load(&self, fs: &dyn Filesystem) -> ScaffoldResult<Cow<'static, str>> {
        match self {
            Self::BuiltIn => Ok(Cow::Borrowed(REPOSITORY_STUB)),
            Self::File(path) => {
                tracing::debug!(path = %path.display(), "loading stub override");
                fs.read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| ScaffoldError::Stub {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MockFilesystem;
    use mockall::predicate::function;
    use std::io;

    #[test]
    fn test_builtin_stub_contains_every_slot() {
        assert!(REPOSITORY_STUB.contains("{{ class }}"));
        assert!(REPOSITORY_STUB.contains("{{ namespace }}"));
        assert!(REPOSITORY_STUB.contains(MODEL_NAMESPACE_TOKEN));
        assert!(REPOSITORY_STUB.contains(COMMENT_NAMESPACE_TOKEN));
        assert!(REPOSITORY_STUB.contains(COMMENT_MODEL_TOKEN));
        assert!(REPOSITORY_STUB.contains(MODEL_TOKEN));
    }

    #[test]
    fn test_tokens_are_disjoint() {
        let tokens: Vec<_> = all_tokens().collect();
        for a in &tokens {
            for b in &tokens {
                if a != b {
                    assert!(!a.contains(b), "{a} contains {b}");
                }
            }
        }
    }

    #[test]
    fn test_resolve_prefers_configured_path() {
        let config = RepokitConfig {
            stub_path: Some(PathBuf::from("custom/repo.stub")),
            ..RepokitConfig::default()
        };
        let fs = MockFilesystem::new();

        assert_eq!(
            StubSource::resolve(&config, &fs),
            StubSource::File(PathBuf::from("custom/repo.stub"))
        );
    }

    #[test]
    fn test_resolve_uses_project_stub_when_present() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(function(|path: &Path| path == Path::new(PROJECT_STUB_PATH)))
            .return_const(true);

        assert_eq!(
            StubSource::resolve(&RepokitConfig::default(), &fs),
            StubSource::File(PathBuf::from(PROJECT_STUB_PATH))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        assert_eq!(
            StubSource::resolve(&RepokitConfig::default(), &fs),
            StubSource::BuiltIn
        );
    }

    #[test]
    fn test_load_reports_unreadable_override() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "gone")));

        let err = StubSource::File(PathBuf::from("missing.stub"))
            .load(&fs)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Stub { .. }));
    }
}
