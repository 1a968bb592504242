//! Shared types used across all modules.
//!
//! Grading and editor modes, exercise descriptors, and listed files.
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod exercise;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use exercise::{Exercise, FileEntry};

/// How exercises are graded.
///
/// Mode names other than the two built-in ones are kept verbatim in
/// [`Grading::Other`] and graded against the state directory, like
/// `incremental`.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Grading {
    /// Each exercise is graded inside its own directory under `exercises/`.
    #[default]
    Isolated,
    /// Exercises are graded in place against the project root.
    Incremental,
    /// Any other mode, as written in the configuration or on the command line.
    #[serde(untagged)]
    #[strum(default)]
    Other(String),
}

impl Grading {
    /// Mode name as it appears in the configuration document.
    pub fn as_str(&self) -> &str {
        match self {
            Grading::Isolated => "isolated",
            Grading::Incremental => "incremental",
            Grading::Other(name) => name,
        }
    }
}

impl fmt::Display for Grading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor integration the learner works in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Editor {
    Gitpod,
    #[default]
    Standalone,
}
