//! Content sources: the one place the crate touches the outside world.
//!
//! A [`ContentSource`] turns a path into text. The store never reads files
//! itself; it asks its source, so applications can plug in an asset bundle,
//! an embedded table, or anything else that can produce a string.
//!
//! [`FsSource`] reads from the filesystem. Relative paths are joined onto a base
//! directory resolved from a [`SearchPath`]; absolute paths are read as-is.
//! [`MemorySource`] serves content from an in-memory table and reports unknown
//! paths as `NotFound`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::SearchPath;

/// Given a path, return its text content or fail.
pub trait ContentSource {
    fn fetch(&self, path: &Path) -> io::Result<String>;
}

impl<F> ContentSource for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn fetch(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// Returns `None` if the directory cannot be determined (e.g. no home directory
/// or no usable current directory).
pub fn resolve_search_path(sp: &SearchPath) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform(app_name) => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Reads content from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    base: SearchPath,
}

impl FsSource {
    pub fn new(base: SearchPath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &SearchPath {
        &self.base
    }

    /// The path that [`fetch`](ContentSource::fetch) will actually read.
    pub fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let dir = resolve_search_path(&self.base).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("could not resolve base directory {:?}", self.base),
            )
        })?;
        Ok(dir.join(path))
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path)?)
    }
}

/// Serves content from an in-memory table keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl ContentSource for MemorySource {
    fn fetch(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no content registered for {}", path.display()),
            )
        })
    }
}
