//! Filesystem port used by the generator
//!
//! The generator only needs four operations, so it talks to this trait
//! instead of `std::fs` directly. [`LocalFilesystem`] resolves relative paths
//! against a project root; tests substitute a mock.

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction over the host filesystem
///
/// Paths handed to these methods are relative to whatever root the
/// implementation is anchored at. Absolute paths are used as-is.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Whether a file or directory exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents; succeeds if it already exists
    fn make_directory(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing anything already there
    fn put(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Read a UTF-8 file
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Local disk filesystem anchored at a project root
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a filesystem rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-joined) location of `path`
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn make_directory(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(self.resolve(path))
    }

    fn put(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(self.resolve(path), contents)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}
