//! Exercise discovery and file access.
//!
//! Builds the exercise index from the exercise root, and exposes the
//! files of one exercise (or of the project root, for `incremental`
//! grading) under the visibility policy shown to learners.

pub mod gateway;
pub mod index;
pub mod listing;
pub mod naming;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

pub use gateway::FileContent;
pub use naming::is_valid_exercise_name;

/// Errors from exercise indexing and file access.
#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error(
        "exercise directory \"{slug}\" has an invalid name: it has to start with two digits \
         followed by words separated by hyphens or underscores (e.g. 01.12-hello-world)"
    )]
    InvalidExerciseName { slug: String, path: PathBuf },

    #[error("exercise not found: {0}")]
    ExerciseNotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("readme file not found: {0}")]
    ReadmeNotFound(PathBuf),

    #[error("asset not found: {0}")]
    AssetNotFound(PathBuf),

    #[error("an exercise slug is required to read its test report")]
    MissingSlug,

    #[error("failed to parse test report {path}: {source}")]
    ReportParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse readme {path}: {message}")]
    ReadmeParse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ExerciseError {
    /// Whether the error was already shown through the [`Console`]
    /// before being returned.
    ///
    /// [`Console`]: crate::console::Console
    pub fn is_reported(&self) -> bool {
        match self {
            Self::InvalidExerciseName { .. } => true,
            Self::Config(err) => err.is_reported(),
            _ => false,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_reported_errors() {
        let invalid = ExerciseError::InvalidExerciseName {
            slug: "bad name".to_string(),
            path: PathBuf::from("exercises/bad name"),
        };
        assert!(invalid.is_reported());
        assert!(ExerciseError::Config(ConfigError::MissingLanguage).is_reported());
        assert!(!ExerciseError::MissingSlug.is_reported());
        assert!(!ExerciseError::FileNotFound(PathBuf::from("app.js")).is_reported());
    }
}
