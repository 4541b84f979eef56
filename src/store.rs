use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::EnvfigError;
use crate::parser::{self, EnvMap, ParseReport};
use crate::source::{ContentSource, FsSource};
use crate::types::{LoadState, SearchPath};
use crate::typed;

/// Path loaded when no explicit path is given.
pub const DEFAULT_PATH: &str = ".env";

/// What the most recent load read from, so [`EnvStore::reload`] can repeat it.
#[derive(Debug, Clone, PartialEq)]
enum LastLoad {
    Path(PathBuf),
    Content(String),
}

/// Builder for an [`EnvStore`].
pub struct EnvStoreBuilder {
    default_path: PathBuf,
    source: Box<dyn ContentSource + Send + Sync>,
}

impl EnvStoreBuilder {
    fn new() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_PATH),
            source: Box::new(FsSource::default()),
        }
    }

    /// Override the path used when `load` is called without one (default: `".env"`).
    pub fn default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// Replace the content source (default: filesystem, relative to the CWD).
    pub fn source(mut self, source: impl ContentSource + Send + Sync + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Read from the filesystem with relative paths resolved against `base`.
    pub fn search_path(self, base: SearchPath) -> Self {
        self.source(FsSource::new(base))
    }

    pub fn build(self) -> EnvStore {
        EnvStore {
            default_path: self.default_path,
            source: self.source,
            state: LoadState::Unloaded,
            report: ParseReport::default(),
            last_load: None,
        }
    }
}

/// Holds the most recently loaded environment and serves typed lookups.
///
/// A store starts unloaded. Every getter fails with
/// [`EnvfigError::NotLoaded`] until a load succeeds. Each load replaces the
/// whole mapping; a failed load leaves the store empty and unloaded.
///
/// ```ignore
/// let mut env = EnvStore::new();
/// env.load_default()?;
/// let port = env.get_int("PORT", Some(8080))?;
/// ```
pub struct EnvStore {
    default_path: PathBuf,
    source: Box<dyn ContentSource + Send + Sync>,
    state: LoadState,
    report: ParseReport,
    last_load: Option<LastLoad>,
}

impl Default for EnvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvStore")
            .field("default_path", &self.default_path)
            .field("state", &self.state)
            .field("keys", &self.report.entries.len())
            .finish_non_exhaustive()
    }
}

impl EnvStore {
    pub fn builder() -> EnvStoreBuilder {
        EnvStoreBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    // --- Loading ---

    /// Load and parse an environment, replacing whatever was loaded before.
    ///
    /// If `content` is given it is parsed verbatim and `path` is ignored.
    /// Otherwise the content is fetched from `path` (or the default path)
    /// through the store's [`ContentSource`].
    ///
    /// On fetch failure the store is cleared, marked unloaded, and
    /// [`EnvfigError::Load`] is returned with the attempted path.
    pub fn load(&mut self, path: Option<&Path>, content: Option<&str>) -> Result<(), EnvfigError> {
        match content {
            Some(content) => {
                self.apply(content);
                self.last_load = Some(LastLoad::Content(content.to_string()));
                tracing::debug!(source = "inline", keys = self.report.entries.len(), "environment loaded");
                Ok(())
            }
            None => {
                let path = path.unwrap_or(self.default_path.as_path()).to_path_buf();
                self.load_from_source(path)
            }
        }
    }

    /// Load from the default path.
    pub fn load_default(&mut self) -> Result<(), EnvfigError> {
        self.load(None, None)
    }

    /// Load from an explicit path.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), EnvfigError> {
        self.load(Some(path.as_ref()), None)
    }

    /// Parse `content` directly, bypassing the content source.
    pub fn load_content(&mut self, content: &str) -> Result<(), EnvfigError> {
        self.load(None, Some(content))
    }

    /// Repeat the most recent load request. Before any load this is
    /// [`load_default`](Self::load_default).
    pub fn reload(&mut self) -> Result<(), EnvfigError> {
        match self.last_load.take() {
            Some(LastLoad::Content(content)) => self.load_content(&content),
            Some(LastLoad::Path(path)) => self.load_from_source(path),
            None => self.load_default(),
        }
    }

    /// Drop the loaded mapping and return to the unloaded state.
    pub fn reset(&mut self) {
        self.report = ParseReport::default();
        self.state = LoadState::Unloaded;
    }

    fn load_from_source(&mut self, path: PathBuf) -> Result<(), EnvfigError> {
        // A failed fetch must not leave the previous mapping readable.
        self.reset();

        let result = self.source.fetch(&path);
        self.last_load = Some(LastLoad::Path(path.clone()));

        match result {
            Ok(content) => {
                self.apply(&content);
                tracing::debug!(
                    path = %path.display(),
                    keys = self.report.entries.len(),
                    "environment loaded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load environment"
                );
                Err(EnvfigError::Load { path, source: e })
            }
        }
    }

    fn apply(&mut self, content: &str) {
        self.report = parser::parse_with_report(content);
        self.state = LoadState::Loaded;
    }

    // --- State ---

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Parse diagnostics from the most recent successful load.
    pub fn last_report(&self) -> Option<&ParseReport> {
        self.state.is_loaded().then_some(&self.report)
    }

    fn ensure_loaded(&self) -> Result<&EnvMap, EnvfigError> {
        if self.state.is_loaded() {
            Ok(&self.report.entries)
        } else {
            Err(EnvfigError::NotLoaded)
        }
    }

    // --- Accessors ---

    /// An owned copy of every loaded variable.
    pub fn snapshot(&self) -> Result<EnvMap, EnvfigError> {
        self.ensure_loaded().cloned()
    }

    /// Whether `name` was declared in the loaded content (even with an empty value).
    pub fn contains(&self, name: &str) -> Result<bool, EnvfigError> {
        Ok(self.ensure_loaded()?.contains_key(name))
    }

    /// Look up a string value.
    ///
    /// A missing or empty value yields `fallback` when one is given. Without a
    /// fallback, an empty value yields `Some("")` and a missing key yields `None`.
    pub fn get(&self, name: &str, fallback: Option<&str>) -> Result<Option<String>, EnvfigError> {
        let value = self.ensure_loaded()?.get(name);
        Ok(match (value, fallback) {
            (Some(v), _) if !v.is_empty() => Some(v.clone()),
            (_, Some(fallback)) => Some(fallback.to_string()),
            (value, None) => value.cloned(),
        })
    }

    /// Alias of [`get`](Self::get).
    pub fn get_string(
        &self,
        name: &str,
        fallback: Option<&str>,
    ) -> Result<Option<String>, EnvfigError> {
        self.get(name, fallback)
    }

    /// Look up a value and parse it with [`FromStr`].
    ///
    /// Missing, empty, and unparsable values all yield `fallback`.
    pub fn get_parsed<T: FromStr>(
        &self,
        name: &str,
        fallback: Option<T>,
    ) -> Result<Option<T>, EnvfigError> {
        Ok(self
            .non_empty(name)?
            .and_then(|v| v.parse().ok())
            .or(fallback))
    }

    pub fn get_int(&self, name: &str, fallback: Option<i64>) -> Result<Option<i64>, EnvfigError> {
        self.get_parsed(name, fallback)
    }

    pub fn get_double(
        &self,
        name: &str,
        fallback: Option<f64>,
    ) -> Result<Option<f64>, EnvfigError> {
        self.get_parsed(name, fallback)
    }

    /// Look up a boolean. `true`/`1` and `false`/`0` are recognized,
    /// case-insensitively; anything else yields `fallback`.
    pub fn get_bool(
        &self,
        name: &str,
        fallback: Option<bool>,
    ) -> Result<Option<bool>, EnvfigError> {
        Ok(self.non_empty(name)?.and_then(parse_bool).or(fallback))
    }

    /// Deserialize the loaded variables into `T`.
    ///
    /// See [`to_value`](crate::to_value) for how keys nest and values are typed.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, EnvfigError> {
        typed::deserialize(self.ensure_loaded()?)
    }

    fn non_empty(&self, name: &str) -> Result<Option<&str>, EnvfigError> {
        Ok(self
            .ensure_loaded()?
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty()))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}
