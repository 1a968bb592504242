//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so editor detection can
//! be exercised against a fake `PATH` without touching process state.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::ENV_PATH;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Directories listed in `PATH`, in search order. Empty when unset.
    pub fn path_dirs(&self) -> Vec<PathBuf> {
        match self.var(ENV_PATH) {
            Ok(value) => std::env::split_paths(&value).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
