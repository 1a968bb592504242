//! Visibility and ordering policy for exercise files.
//!
//! Learners see entry files first (`index.html`, then stylesheets, then
//! `index.js`) and never see tests, hidden files, compiled classes,
//! the README, or sub-directories.

use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use super::ExerciseError;
use crate::constants::README_FILENAME;
use crate::models::FileEntry;

/// Sorting priority for well-known entry files. Lower shows first.
const PRIORITY: &[(&str, u8)] = &[
    ("index.html", 1),
    ("styles.css", 2),
    ("styles.scss", 2),
    ("style.css", 2),
    ("style.scss", 2),
    ("index.css", 2),
    ("index.scss", 2),
    ("index.js", 3),
];

/// Name fragments that hide a file (matched case-insensitively).
const HIDDEN_MARKERS: &[&str] = &["test.", "tests.", ".hide.", ".class"];

/// Rank of a file name in the priority table, if it has one.
pub fn priority(name: &str) -> Option<u8> {
    PRIORITY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, rank)| *rank)
}

/// Whether a directory entry is shown to the learner.
pub fn is_visible(name: &str, is_dir: bool, ignore: Option<&Regex>) -> bool {
    if is_dir || name.starts_with('_') || name.eq_ignore_ascii_case(README_FILENAME) {
        return false;
    }

    let lower = name.to_lowercase();
    if HIDDEN_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return false;
    }

    !ignore.is_some_and(|re| re.is_match(name))
}

/// Every entry of `dir`, in enumeration order, unfiltered.
pub fn list_all(dir: &Path) -> Result<Vec<FileEntry>, ExerciseError> {
    Ok(read_entries(dir)?.into_iter().map(|(entry, _)| entry).collect())
}

/// The learner-visible files of `dir`, ranked by the priority table.
///
/// Unranked files follow all ranked ones and keep their enumeration
/// order.
pub fn list_visible(dir: &Path, ignore: Option<&Regex>) -> Result<Vec<FileEntry>, ExerciseError> {
    let mut files: Vec<FileEntry> = read_entries(dir)?
        .into_iter()
        .filter(|(entry, is_dir)| is_visible(&entry.name, *is_dir, ignore))
        .map(|(entry, _)| entry)
        .collect();

    files.sort_by_key(|f| priority(&f.name).unwrap_or(u8::MAX));
    Ok(files)
}

/// Immediate children of `dir` paired with whether each is a directory.
///
/// Symlinks are not followed, so a link to a directory counts as a file.
fn read_entries(dir: &Path) -> Result<Vec<(FileEntry, bool)>, ExerciseError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ExerciseError::io(dir, e.into()))?;
        let name = entry.file_name().to_string_lossy().to_string();
        let is_dir = entry.file_type().is_dir();
        entries.push((
            FileEntry {
                path: entry.into_path(),
                name,
            },
            is_dir,
        ));
    }

    Ok(entries)
}
