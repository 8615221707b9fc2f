//! Environment adapters.
//!
//! `.env` files are layered underneath real variables: a key already present
//! in the process environment (or snapshot) is never overwritten by the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::EnvSource;

/// Reads the live process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Process environment reader.
    pub const fn new() -> Self {
        Self
    }

    /// Load `.env` from the current directory or its ancestors into the
    /// process environment. Returns the file used, `None` when there is none.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    /// Load a specific `.env` file into the process environment.
    pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
        dotenvy::from_path(path.as_ref())
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

/// Owned, immutable copy of an environment namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Empty snapshot: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Snapshot holding exactly the given pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Add the entries of a `.env` file that are not already set.
    pub fn with_dotenv(mut self, path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            self.vars.entry(key).or_insert(value);
        }
        Ok(self)
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for EnvSnapshot {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
