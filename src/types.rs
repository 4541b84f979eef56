use std::path::PathBuf;

/// Where a filesystem source resolves relative paths from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPath {
    /// Platform config directory for the given app name (XDG on Linux,
    /// ~/Library/Application Support on macOS).
    Platform(String),
    /// A subdirectory under the user's home directory, e.g. `Home(".myapp")`.
    Home(&'static str),
    /// Current working directory.
    #[default]
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// Whether a store currently holds a successfully parsed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
}

impl LoadState {
    pub fn is_loaded(self) -> bool {
        self == LoadState::Loaded
    }
}
