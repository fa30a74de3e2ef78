//! `make-repository` command
//!
//! # Example
//!
//! ```bash
//! repokit make-repository userProfile
//! repokit make-repository PostRepository --model 'App\Models\Post'
//! repokit make-repository Admin/AuditLogRepository -M 'App\Models\AuditLog' --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use repokit::config::RepokitConfig;
use repokit::filesystem::LocalFilesystem;
use repokit::scaffold::{NameHelpers, RenderedSource, RepositoryGenerator, ScaffoldRequest, KIND};
use std::path::PathBuf;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");

/// Create a repository class
#[derive(Debug, Clone, Args)]
pub struct MakeRepositoryCommand {
    /// Your repository class name
    pub class: Option<String>,

    /// The model used by the repository, as a full namespace
    /// (default: `App\Your\Model`, which adds reminder comments)
    #[arg(short = 'M', long)]
    pub model: Option<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Extra configuration file, applied on top of `repokit.toml`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the generated class instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl MakeRepositoryCommand {
    /// Create a command for `class` in the project at `path`
    pub fn new(class: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            class: Some(class.into()),
            model: None,
            path: path.into(),
            config: None,
            dry_run: false,
        }
    }

    /// Set the model reference
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Render without writing
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Resolve, render and (unless dry-running) write the repository
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The class name is missing
    /// - The target file already exists
    /// - Configuration cannot be loaded
    /// - The stub cannot be read or the file cannot be written
    pub fn run(&self) -> Result<RenderedSource> {
        let config = RepokitConfig::load_with(&self.path, self.config.as_deref())
            .context("Failed to load configuration")?;
        tracing::debug!(root = %self.path.display(), ?config, "configuration loaded");

        let request = ScaffoldRequest::new(
            self.class.as_deref().unwrap_or_default(),
            self.model.as_deref(),
            &config,
        )?;

        let fs = LocalFilesystem::new(&self.path);
        let generator = RepositoryGenerator::new(&config);

        let rendered = if self.dry_run {
            generator.preview(&request, &fs)?
        } else {
            generator.generate(&request, &fs)?
        };

        Ok(rendered)
    }

    /// Run the command and report the outcome on stdout
    ///
    /// # Errors
    ///
    /// Returns the error from [`run`](Self::run) unchanged.
    pub fn execute(&self) -> Result<()> {
        let rendered = self.run()?;
        let class = NameHelpers::class_basename(&rendered.qualified_class);

        if self.dry_run {
            println!(
                "{} {}",
                style("Would create").cyan().bold(),
                style(rendered.path.display()).dim()
            );
            println!();
            print!("{}", rendered.contents);
            return Ok(());
        }

        println!("{} {}", SUCCESS, style(format!("{KIND} created successfully.")).green());
        println!(
            "{} {}",
            style(format!("Created {KIND} :")).green().bold(),
            style(class).cyan()
        );
        println!("  {}", style(rendered.path.display()).dim());

        Ok(())
    }
}
