//! App-wide constants.
//!
//! Centralises the tool name, workspace paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "bcws";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

// ── Workspace layout ────────────────────────────────────────────────

/// Hidden per-project state directory.
pub const STATE_DIR: &str = ".breathecode";

/// Candidate configuration documents, relative to the project root, in
/// the order they are probed.
pub const CONFIG_CANDIDATES: &[&str] = &["bc.json", ".bc.json", ".breathecode/.bc.json"];

/// Where the configuration is written when no document exists yet.
pub const DEFAULT_CONFIG_PATH: &str = ".breathecode/bc.json";

/// Exercise root for `isolated` grading, relative to the project root.
pub const ISOLATED_EXERCISES_DIR: &str = "exercises";

/// Exercise root for every other grading mode, relative to the project root.
pub const STATE_EXERCISES_DIR: &str = ".breathecode/exercises";

/// Per-exercise test reports, relative to the project root.
pub const REPORTS_DIR: &str = ".breathecode/reports";

/// Shared assets directory, relative to the project root.
pub const ASSETS_DIR: &str = "_assets";

/// Readme file name looked up in exercise directories and the project root.
pub const README_FILENAME: &str = "README.md";

/// Gitpod CLI binary whose presence selects the `gitpod` editor.
pub const GITPOD_BINARY: &str = "gp";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PATH: &str = "PATH";
pub const ENV_LOG: &str = "BCWS_LOG";
