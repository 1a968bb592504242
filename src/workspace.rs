//! The resolved exercise workspace.
//!
//! [`Workspace`] owns the configuration of one project root for the
//! duration of a CLI invocation, remembers where it is persisted, and
//! scopes every exercise operation to that configuration.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::{self, Config, ConfigDocument, ConfigError, Overrides};
use crate::console::{Console, TerminalConsole};
use crate::constants::README_FILENAME;
use crate::exercises::{ExerciseError, FileContent, gateway, index, listing};
use crate::frontmatter::Readme;
use crate::models::{Exercise, FileEntry, Grading};
use crate::probe::{EditorProbe, PathProbe};

/// A project root with its resolved configuration.
pub struct Workspace {
    root: PathBuf,
    document: ConfigDocument,
    config: Config,
    console: Box<dyn Console>,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("document", &self.document)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    /// Resolve the workspace at `root`, printing to the terminal and
    /// detecting Gitpod from `PATH`.
    pub fn resolve(root: impl Into<PathBuf>, overrides: Overrides) -> Result<Self, ConfigError> {
        Self::resolve_with(root, overrides, Box::new(TerminalConsole), &PathProbe::gitpod())
    }

    /// Resolve the workspace with explicit collaborators.
    pub fn resolve_with(
        root: impl Into<PathBuf>,
        overrides: Overrides,
        console: Box<dyn Console>,
        probe: &dyn EditorProbe,
    ) -> Result<Self, ConfigError> {
        let root = root.into();
        let (config, document) = config::resolve(&root, &overrides, console.as_ref(), probe)?;
        Ok(Self {
            root,
            document,
            config,
            console,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Path the configuration is saved to.
    pub fn config_path(&self) -> &Path {
        self.document.path()
    }

    /// Indexed exercises; empty until [`Workspace::build_index`] has run.
    pub fn exercises(&self) -> &[Exercise] {
        self.config.exercises.as_deref().unwrap_or_default()
    }

    /// Persist the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.document.write(&self.config)?;
        self.console.debug(&format!(
            "Saved configuration to {}",
            self.document.path().display()
        ));
        Ok(())
    }

    /// Rebuild the exercise index and persist it.
    ///
    /// Nothing is written when any exercise directory is badly named.
    pub fn build_index(&mut self) -> Result<(), ExerciseError> {
        index::build_index(&self.root, &mut self.config, self.console.as_ref())?;
        self.save()?;
        Ok(())
    }

    /// Test report of an exercise, or an empty object if it has not run.
    pub fn test_report(&self, slug: &str) -> Result<Value, ExerciseError> {
        gateway::read_report(&self.root, slug)
    }

    /// README of an exercise, or of the project when `slug` is `None`.
    pub fn readme(&self, slug: Option<&str>) -> Result<Readme, ExerciseError> {
        let dir = match slug {
            Some(slug) => &self.exercise(slug)?.path,
            None => &self.root,
        };
        gateway::read_readme(&dir.join(README_FILENAME))
    }

    /// Read one file of an exercise.
    pub fn file(&self, slug: &str, name: &str) -> Result<FileContent, ExerciseError> {
        gateway::read_file(&self.exercise(slug)?.path, name)
    }

    /// Read a shared asset.
    pub fn asset(&self, name: &str) -> Result<Vec<u8>, ExerciseError> {
        gateway::read_asset(&self.root, name)
    }

    /// Overwrite an existing file of an exercise.
    pub fn save_file(
        &self,
        slug: &str,
        name: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<(), ExerciseError> {
        gateway::write_file(&self.exercise(slug)?.path, name, content.as_ref())
    }

    /// Files the learner sees for an exercise, in display order.
    ///
    /// With `incremental` grading the project root is listed instead of
    /// the exercise directory.
    pub fn visible_files(&self, slug: &str) -> Result<Vec<FileEntry>, ExerciseError> {
        let exercise = self.exercise(slug)?;
        let dir = match self.config.grading {
            Grading::Incremental => &self.root,
            Grading::Isolated | Grading::Other(_) => &exercise.path,
        };
        listing::list_visible(dir, self.config.ignore_regex.as_ref())
    }

    /// Every entry of the exercise directory, unfiltered.
    pub fn all_files(&self, slug: &str) -> Result<Vec<FileEntry>, ExerciseError> {
        listing::list_all(&self.exercise(slug)?.path)
    }

    fn exercise(&self, slug: &str) -> Result<&Exercise, ExerciseError> {
        self.config
            .find_exercise(slug)
            .ok_or_else(|| ExerciseError::ExerciseNotFound(slug.to_string()))
    }
}
