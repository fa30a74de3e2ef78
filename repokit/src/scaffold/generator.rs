//! Repository class generator
//!
//! Turns a [`ScaffoldRequest`] into a rendered source file and writes it to
//! the conventional location, refusing to touch an existing file.

use std::path::PathBuf;

use super::naming::{NameHelpers, NAMESPACE_SEPARATOR};
use super::stub::{
    all_tokens, StubSource, CLASS_TOKENS, COMMENT_MODEL_TOKEN, COMMENT_NAMESPACE_TOKEN,
    MODEL_NAMESPACE_TOKEN, MODEL_REMINDER, MODEL_TOKEN, NAMESPACE_REMINDER, NAMESPACE_TOKENS,
    ROOT_NAMESPACE_TOKENS, SETUP_COMMENT,
};
use crate::config::RepokitConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::filesystem::Filesystem;

/// Kind of class this generator produces, used in status messages
pub const KIND: &str = "Repository";

/// A validated `make-repository` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    class_name: String,
    model_reference: String,
    model_name: String,
    default_model: bool,
}

impl ScaffoldRequest {
    /// Build a request from raw command input
    ///
    /// The first character of `class` is uppercased. A missing `model`
    /// falls back to the configured sentinel reference.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingArgument`] if `class` is empty or blank,
    /// and [`ScaffoldError::InvalidClassName`] if any of its segments is not
    /// an identifier.
    pub fn new(class: &str, model: Option<&str>, config: &RepokitConfig) -> ScaffoldResult<Self> {
        let class = class.trim();
        if class.is_empty() {
            return Err(ScaffoldError::MissingArgument("class"));
        }
        if !NameHelpers::is_valid_class_name(class) {
            return Err(ScaffoldError::InvalidClassName(class.to_string()));
        }

        let model_reference = model.unwrap_or(&config.default_model).to_string();
        let model_name = NameHelpers::class_basename(&model_reference).to_string();
        let default_model = model_reference == config.default_model;

        Ok(Self {
            class_name: NameHelpers::capitalize_first(class),
            model_reference,
            model_name,
            default_model,
        })
    }

    /// Class name after capitalization, possibly with sub-namespaces
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Model reference exactly as supplied (or the sentinel)
    #[must_use]
    pub fn model_reference(&self) -> &str {
        &self.model_reference
    }

    /// Last segment of the model reference
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Whether the model reference is the "not customized" sentinel
    #[must_use]
    pub const fn uses_default_model(&self) -> bool {
        self.default_model
    }
}

/// Output of rendering a stub for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSource {
    /// Fully qualified class, e.g. `App\Repositories\UserRepository`
    pub qualified_class: String,
    /// Target file, relative to the project root
    pub path: PathBuf,
    /// File contents
    pub contents: String,
}

/// Repository class generator
#[derive(Debug, Clone)]
pub struct RepositoryGenerator {
    config: RepokitConfig,
}

impl RepositoryGenerator {
    /// Create a generator for a project configuration
    #[must_use]
    pub fn new(config: &RepokitConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fully qualified class name for a request
    #[must_use]
    pub fn qualified_class(&self, request: &ScaffoldRequest) -> String {
        NameHelpers::qualify_class(
            request.class_name(),
            &self.config.root_namespace,
            &self.config.repository_namespace(),
        )
    }

    /// Target file for a request, relative to the project root
    #[must_use]
    pub fn target_path(&self, request: &ScaffoldRequest) -> PathBuf {
        NameHelpers::class_path(
            &self.qualified_class(request),
            &self.config.root_namespace,
            &self.config.app_dir,
        )
    }

    /// Substitute every placeholder in `stub`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnresolvedPlaceholder`] if a placeholder token
    /// that did not come from a substituted value is still present afterwards.
    pub fn render(&self, request: &ScaffoldRequest, stub: &str) -> ScaffoldResult<RenderedSource> {
        let qualified_class = self.qualified_class(request);
        let class = NameHelpers::class_basename(&qualified_class).to_string();
        let namespace = NameHelpers::namespace_of(&qualified_class).to_string();
        let root_namespace = format!(
            "{}{NAMESPACE_SEPARATOR}",
            self.config.root_namespace.trim_matches(NAMESPACE_SEPARATOR)
        );

        let mut contents = replace_all(stub, NAMESPACE_TOKENS, &namespace);
        contents = replace_all(&contents, ROOT_NAMESPACE_TOKENS, &root_namespace);
        contents = replace_all(&contents, CLASS_TOKENS, &class);

        contents = contents.replace(MODEL_NAMESPACE_TOKEN, request.model_reference());

        let (namespace_comment, model_comment) = if request.uses_default_model() {
            (NAMESPACE_REMINDER, MODEL_REMINDER)
        } else {
            ("", SETUP_COMMENT)
        };
        contents = contents
            .replace(COMMENT_NAMESPACE_TOKEN, namespace_comment)
            .replace(COMMENT_MODEL_TOKEN, model_comment);

        contents = contents.replace(MODEL_TOKEN, request.model_name());

        let substituted = [
            namespace.as_str(),
            root_namespace.as_str(),
            class.as_str(),
            request.model_reference(),
            request.model_name(),
        ];
        if let Some(token) = all_tokens()
            .find(|token| {
                contents.contains(token) && !substituted.iter().any(|value| value.contains(token))
            })
        {
            return Err(ScaffoldError::UnresolvedPlaceholder(token.to_string()));
        }

        Ok(RenderedSource {
            path: self.target_path(request),
            qualified_class,
            contents,
        })
    }

    /// Resolve, check and render without writing anything
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] if the target file is present,
    /// or any error from loading or rendering the stub.
    pub fn preview(
        &self,
        request: &ScaffoldRequest,
        fs: &dyn Filesystem,
    ) -> ScaffoldResult<RenderedSource> {
        let path = self.target_path(request);
        tracing::debug!(
            class = request.class_name(),
            model = request.model_reference(),
            path = %path.display(),
            "resolved repository target"
        );

        if fs.exists(&path) {
            tracing::warn!(path = %path.display(), "refusing to overwrite existing repository");
            return Err(ScaffoldError::AlreadyExists { kind: KIND, path });
        }

        let stub = StubSource::resolve(&self.config, fs).load(fs)?;
        self.render(request, &stub)
    }

    /// Render and write the repository class
    ///
    /// Missing parent directories are created. Nothing is written when the
    /// target already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::AlreadyExists`] if the target file is present,
    /// [`ScaffoldError::Io`] if a directory or the file cannot be written, or
    /// any error from loading or rendering the stub.
    pub fn generate(
        &self,
        request: &ScaffoldRequest,
        fs: &dyn Filesystem,
    ) -> ScaffoldResult<RenderedSource> {
        let rendered = self.preview(request, fs)?;

        if let Some(parent) = rendered.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs.make_directory(parent)
                .map_err(|source| ScaffoldError::io(parent, source))?;
        }

        fs.put(&rendered.path, &rendered.contents)
            .map_err(|source| ScaffoldError::io(&rendered.path, source))?;

        tracing::info!(
            class = %rendered.qualified_class,
            path = %rendered.path.display(),
            "repository created"
        );

        Ok(rendered)
    }
}

fn replace_all(input: &str, tokens: &[&str], value: &str) -> String {
    tokens
        .iter()
        .fold(input.to_string(), |acc, token| acc.replace(token, value))
}
