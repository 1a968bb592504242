//! Scoped file access for exercises, assets, readmes, and test reports.
//!
//! Every name passed in is sanitized before it is joined onto its scope
//! directory, so callers cannot reach outside the exercise, the assets
//! directory, or the reports directory.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::ExerciseError;
use crate::constants::{ASSETS_DIR, REPORTS_DIR};
use crate::frontmatter::{self, Readme};

/// Result of reading a named exercise file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Raw bytes of the file.
    File(Vec<u8>),
    /// The name points at a directory. Reported as a value rather than an
    /// error because it is an easy mistake to make interactively.
    Directory { path: PathBuf, message: String },
}

impl FileContent {
    /// File bytes, or `None` for a directory.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FileContent::File(bytes) => Some(bytes),
            FileContent::Directory { .. } => None,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FileContent::Directory { .. })
    }
}

/// Read and parse a README with optional frontmatter.
pub fn read_readme(path: &Path) -> Result<Readme, ExerciseError> {
    if !path.is_file() {
        return Err(ExerciseError::ReadmeNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ExerciseError::io(path, e))?;
    frontmatter::parse_readme(&content).map_err(|message| ExerciseError::ReadmeParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read `name` from `dir`.
///
/// A directory yields [`FileContent::Directory`] instead of an error.
pub fn read_file(dir: &Path, name: &str) -> Result<FileContent, ExerciseError> {
    let path = dir.join(sanitize_path(name));
    let metadata = match std::fs::symlink_metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExerciseError::FileNotFound(path));
        }
        Err(e) => return Err(ExerciseError::io(path, e)),
    };

    if metadata.is_dir() {
        let message = format!(
            "this is not a file to be read, but a directory: {}",
            path.display()
        );
        return Ok(FileContent::Directory { path, message });
    }

    std::fs::read(&path)
        .map(FileContent::File)
        .map_err(|e| ExerciseError::io(path, e))
}

/// Overwrite an existing file in `dir`. Never creates new files.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> Result<(), ExerciseError> {
    let path = dir.join(sanitize_path(name));
    if !path.exists() {
        return Err(ExerciseError::FileNotFound(path));
    }
    std::fs::write(&path, content).map_err(|e| ExerciseError::io(path, e))
}

/// Read a shared asset from `<root>/_assets`.
pub fn read_asset(root: &Path, name: &str) -> Result<Vec<u8>, ExerciseError> {
    let path = root.join(ASSETS_DIR).join(sanitize_path(name));
    if !path.is_file() {
        return Err(ExerciseError::AssetNotFound(path));
    }
    std::fs::read(&path).map_err(|e| ExerciseError::io(path, e))
}

/// Read the test report of `slug`; an empty object when none exists yet.
pub fn read_report(root: &Path, slug: &str) -> Result<Value, ExerciseError> {
    let slug = sanitize_path(slug);
    if slug.as_os_str().is_empty() {
        return Err(ExerciseError::MissingSlug);
    }

    let path = root
        .join(REPORTS_DIR)
        .join(format!("{}.json", slug.display()));
    if !path.is_file() {
        return Ok(Value::Object(Map::new()));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ExerciseError::io(&path, e))?;
    serde_json::from_str(&content).map_err(|e| ExerciseError::ReportParse { path, source: e })
}

/// Sanitize a relative path to prevent directory traversal.
pub fn sanitize_path(path: &str) -> PathBuf {
    let path = path.replace('\\', "/");
    let mut result = PathBuf::new();

    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                result.pop();
            }
            c => result.push(c),
        }
    }

    result
}
