//! Clap argument types and override mapping.

use clap::Parser;
use std::path::PathBuf;

use bcws::config::Overrides;
use bcws::models::{Editor, Grading};

/// Exercise workspace configuration and indexing.
#[derive(Parser, Debug)]
#[command(
    name = "bcws",
    version = bcws::constants::VERSION,
    about = "Resolve exercise workspace configuration, build the exercise index, and inspect exercise files."
)]
pub struct Cli {
    /// Project root (default: current directory).
    #[arg(long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Language or compiler track (overrides bc.json).
    #[arg(long, short = 'l', global = true)]
    pub language: Option<String>,

    /// Grading mode: isolated, incremental, or any other mode name
    /// (overrides bc.json and language defaults).
    #[arg(long, global = true)]
    pub grading: Option<Grading>,

    /// Editor integration (overrides bc.json and detection).
    #[arg(long, global = true)]
    pub editor: Option<Editor>,

    /// Mark grading as disabled for this workspace.
    #[arg(long, global = true, default_value_t = false)]
    pub disable_grading: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON.
    Config,

    /// Rebuild the exercise index and save the configuration.
    Index,

    /// List indexed exercises.
    Exercises,

    /// List the files of an exercise in display order.
    Files(FilesArgs),

    /// Print the README of an exercise, or of the project.
    Readme {
        /// Exercise slug (omit for the project README).
        slug: Option<String>,
    },

    /// Print one file of an exercise.
    Cat {
        /// Exercise slug.
        slug: String,
        /// File name inside the exercise directory.
        name: String,
    },

    /// Print the test report of an exercise.
    Report {
        /// Exercise slug.
        slug: String,
    },

    /// List the known languages and compilers.
    Languages,

    /// Print version and build information.
    Version,
}

/// Arguments for the `files` subcommand.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Exercise slug.
    pub slug: String,

    /// Show every entry, including hidden files, tests, and directories.
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

impl Cli {
    /// Runtime overrides for configuration resolution.
    ///
    /// `--disable-grading` only ever sets the flag; leaving it off keeps
    /// whatever bc.json says.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            grading: self.grading.clone(),
            editor: self.editor,
            language: self.language.clone(),
            disable_grading: self.disable_grading.then_some(true),
        }
    }
}
