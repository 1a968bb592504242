//! Exercise index construction.
//!
//! Scans the immediate sub-directories of the exercise root and turns
//! each into an [`Exercise`]. Validation is all-or-nothing: a single
//! badly named directory aborts the whole build and leaves the previous
//! index untouched.

use std::path::Path;

use walkdir::WalkDir;

use super::ExerciseError;
use super::naming::is_valid_exercise_name;
use crate::config::Config;
use crate::console::Console;
use crate::constants::STATE_DIR;
use crate::models::Exercise;

/// List exercise directories under `exercises_path`, ordered by name.
///
/// Non-directory entries are skipped. Names are not validated here.
pub fn scan_exercises(exercises_path: &Path) -> Result<Vec<Exercise>, ExerciseError> {
    let mut exercises = Vec::new();

    for entry in WalkDir::new(exercises_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ExerciseError::io(exercises_path, e.into()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let slug = entry.file_name().to_string_lossy().to_string();
        exercises.push(Exercise::new(exercises_path, slug));
    }

    Ok(exercises)
}

/// Rebuild `config.exercises` from the exercise root.
///
/// Creates the state directory and the configured output directory
/// first. Does not persist; callers save once the index is in place.
pub fn build_index(
    root: &Path,
    config: &mut Config,
    console: &dyn Console,
) -> Result<(), ExerciseError> {
    ensure_dir(&root.join(STATE_DIR))?;
    if let Some(output) = &config.output_path {
        ensure_dir(&root.join(output))?;
    }

    let exercises = scan_exercises(&config.exercises_path)?;

    if let Some(invalid) = exercises.iter().find(|ex| !is_valid_exercise_name(&ex.slug)) {
        let err = ExerciseError::InvalidExerciseName {
            slug: invalid.slug.clone(),
            path: invalid.path.clone(),
        };
        console.error(&err.to_string());
        console.help(&format!(
            "Verify that the folder \"{}\" starts with a number and does not contain white spaces or special characters.",
            invalid.slug
        ));
        return Err(err);
    }

    console.debug(&format!(
        "Indexed {} exercise(s) under {}",
        exercises.len(),
        config.exercises_path.display()
    ));
    config.exercises = Some(exercises);
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), ExerciseError> {
    std::fs::create_dir_all(path).map_err(|e| ExerciseError::io(path, e))
}
