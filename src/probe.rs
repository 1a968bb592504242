//! Editor integration detection.
//!
//! Decides whether the workspace runs inside Gitpod by looking for the
//! Gitpod CLI on `PATH`. Exposed as a trait so resolution can be tested
//! with a fixed answer.

use std::path::{Path, PathBuf};

use crate::constants::GITPOD_BINARY;
use crate::env::Env;

/// Capability check for an editor integration tool.
pub trait EditorProbe {
    /// Returns `true` when the editor integration tool is installed.
    fn is_editor_tool_available(&self) -> bool;
}

/// Probe that searches `PATH` for an executable.
#[derive(Debug, Clone)]
pub struct PathProbe {
    binary: String,
    env: Env,
}

impl PathProbe {
    /// Probe for the Gitpod CLI in the real process environment.
    pub fn gitpod() -> Self {
        Self::new(GITPOD_BINARY, Env::real())
    }

    pub fn new(binary: impl Into<String>, env: Env) -> Self {
        Self {
            binary: binary.into(),
            env,
        }
    }

    /// Full path of the binary, if found on `PATH`.
    pub fn locate(&self) -> Option<PathBuf> {
        let exts: &[&str] = if cfg!(windows) {
            &[".exe", ".cmd", ".bat", ""]
        } else {
            &[""]
        };

        for dir in self.env.path_dirs() {
            for ext in exts {
                let candidate = dir.join(format!("{}{}", self.binary, ext));
                if is_executable_file(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl EditorProbe for PathProbe {
    fn is_editor_tool_available(&self) -> bool {
        self.locate().is_some()
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub bool);

impl EditorProbe for StaticProbe {
    fn is_editor_tool_available(&self) -> bool {
        self.0
    }
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
