//! Exercise descriptors and listed files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One directory of learner-facing material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Directory name; the canonical identifier of the exercise.
    pub slug: String,
    /// Display title. Equal to the slug until richer metadata is layered on.
    pub title: String,
    /// Path to the exercise directory.
    pub path: PathBuf,
}

impl Exercise {
    /// Descriptor for the directory `slug` inside `exercises_path`.
    pub fn new(exercises_path: &std::path::Path, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: slug.clone(),
            path: exercises_path.join(&slug),
            slug,
        }
    }
}

/// A file exposed by the exercise lister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
}
