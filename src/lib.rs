//! Exercise workspace configuration core (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod console;
pub mod constants;
pub mod env;
pub mod exercises;
pub mod frontmatter;
pub mod models;
pub mod probe;
pub mod workspace;

pub use config::{Config, ConfigError, Overrides};
pub use exercises::ExerciseError;
pub use workspace::Workspace;
