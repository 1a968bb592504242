//! Configuration resolution and persistence.
//!
//! Locates the JSON configuration document, layers it over the built-in
//! language defaults and runtime overrides, and writes it back.

pub mod defaults;
pub mod document;
pub mod loader;
pub mod merge;

pub use document::ConfigDocument;
pub use loader::{Config, ConfigError, Overrides, exercises_path, resolve};
