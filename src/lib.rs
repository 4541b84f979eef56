//! Dotenv-style `KEY=VALUE` parsing with typed, fallback-aware accessors.
//!
//! Envfig reads a `.env`-like file (or a string you already have), turns it
//! into a mapping of variable names to string values, and hands out typed
//! lookups with optional fallbacks.
//!
//! ```ignore
//! let mut env = EnvStore::new();
//! env.load_default()?;                       // reads ./.env
//!
//! let host = env.get("HOST", Some("localhost"))?;
//! let port = env.get_int("PORT", Some(8080))?;
//! let debug = env.get_bool("DEBUG", Some(false))?;
//! ```
//!
//! # File format
//!
//! One assignment per line:
//!
//! ```text
//! # full-line comment
//! HOST=0.0.0.0
//! GREETING = "hello world"     # quotes and trailing comment stripped
//! DSN=postgres://u:p@db/app?sslmode=require
//! EMPTY=
//! ```
//!
//! - Leading and trailing whitespace on the line, the key, and the value is
//!   trimmed. Inner whitespace is kept.
//! - Everything from the first `#` on is a comment. This is quote-unaware:
//!   `COLOR="#fff"` does **not** keep the hash.
//! - The key ends at the first `=`. Further `=` belong to the value.
//! - One matching pair of surrounding `"` or `'` is removed. There are no
//!   escape sequences, no variable expansion, and no multi-line values.
//! - Lines that are not assignments are skipped silently. A later assignment
//!   to the same key wins.
//!
//! The parser never fails. Use [`parse_with_report`] if you want to know which
//! lines were skipped and why.
//!
//! # The store
//!
//! [`EnvStore`] is an ordinary value owned by your application: construct it at
//! startup, load it once, and pass it (or a reference to it) to whatever needs
//! configuration. There is no global state.
//!
//! A store is either unloaded or loaded. Every accessor on an unloaded store
//! returns [`EnvfigError::NotLoaded`]. A successful load replaces the whole
//! mapping; keys from an earlier load do not linger. A failed load returns
//! [`EnvfigError::Load`] and leaves the store unloaded and empty, so nothing
//! stale is ever served. [`reset()`](EnvStore::reset) returns a store to the
//! unloaded state explicitly, and [`reload()`](EnvStore::reload) repeats the
//! last load.
//!
//! Loading reads through a [`ContentSource`], which is the one external
//! capability the crate needs: "given a path, return its text". The default is
//! [`FsSource`] relative to the working directory. Swap in [`MemorySource`],
//! your own asset loader, or a closure via
//! [`EnvStoreBuilder::source`]. Passing content directly with
//! [`load_content()`](EnvStore::load_content) bypasses the source entirely.
//!
//! # Fallback rules
//!
//! | Stored value | `get(k, None)` | `get(k, Some(d))` | `get_int(k, None)` | `get_int(k, Some(d))` |
//! |--------------|----------------|-------------------|--------------------|-----------------------|
//! | missing      | `None`         | `Some(d)`         | `None`             | `Some(d)`             |
//! | `""`         | `Some("")`     | `Some(d)`         | `None`             | `Some(d)`             |
//! | `"42"`       | `Some("42")`   | `Some("42")`      | `Some(42)`         | `Some(42)`            |
//! | `"abc"`      | `Some("abc")`  | `Some("abc")`     | `None`             | `Some(d)`             |
//!
//! The string getter is the only one that distinguishes "declared but empty"
//! from "never declared", and only when no fallback is given. The typed getters
//! ([`get_int`](EnvStore::get_int), [`get_double`](EnvStore::get_double),
//! [`get_bool`](EnvStore::get_bool), [`get_parsed`](EnvStore::get_parsed))
//! collapse missing, empty, and unparsable values into the fallback.
//!
//! Booleans accept `true`/`1` and `false`/`0`, case-insensitively.
//!
//! # Deserializing into a struct
//!
//! [`EnvStore::deserialize`] maps the loaded variables onto any
//! `serde::Deserialize` type. Keys are lowercased and `__` separates nesting
//! levels, so `DATABASE__POOL_SIZE=20` fills `database.pool_size`. Values are
//! typed heuristically (bool, then integer, then float, then string).
//!
//! # Error handling
//!
//! All fallible operations return [`EnvfigError`]. See the [`error`] module.

pub mod error;
pub mod types;

mod parser;
mod source;
mod store;
mod typed;

#[cfg(test)]
mod fixtures;

pub use error::EnvfigError;
pub use parser::{EnvMap, ParseReport, SkipReason, SkippedLine, parse, parse_with_report};
pub use source::{ContentSource, FsSource, MemorySource, resolve_search_path};
pub use store::{DEFAULT_PATH, EnvStore, EnvStoreBuilder};
pub use typed::to_value;
pub use types::{LoadState, SearchPath};
