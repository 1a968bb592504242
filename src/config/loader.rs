//! Config struct and resolution logic.
//!
//! Priority (highest to lowest):
//! 1. `grading` / `editor` overrides
//! 2. `language` / `disable_grading` overrides
//! 3. The configuration document (`bc.json` and friends)
//! 4. Editor detection, when nothing above sets an editor
//! 5. Built-in language defaults

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::defaults::{self, LanguageDefaults};
use super::document::ConfigDocument;
use super::merge::{Layer, merge_layers};
use crate::console::Console;
use crate::constants::{ISOLATED_EXERCISES_DIR, STATE_DIR, STATE_EXERCISES_DIR};
use crate::models::{Editor, Exercise, Grading};
use crate::probe::EditorProbe;

const KEY_LANGUAGE: &str = "language";
const KEY_COMPILER: &str = "compiler";
const KEY_GRADING: &str = "grading";
const KEY_EDITOR: &str = "editor";
const KEY_DISABLE_GRADING: &str = "disable_grading";
const KEY_IGNORE_REGEX: &str = "ignoreRegex";
const KEY_EXERCISES_PATH: &str = "exercisesPath";

/// Errors during configuration resolution and persistence.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid {path} syntax: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid {path} syntax: the document must be a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("invalid value in {path}: {source}")]
    InvalidField {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("the language has to be specified in bc.json or with the --language flag")]
    MissingLanguage,

    #[error("invalid language or compiler: {0}")]
    UnknownLanguage(String),

    #[error(
        "you are running with {grading} grading, so make sure you have an exercises folder at {path}"
    )]
    MissingExercisesDirectory { grading: Grading, path: PathBuf },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(serde_json::Error),

    #[error("built-in defaults for {language} are not a valid JSON object: {source}")]
    InvalidDefaults {
        language: String,
        source: serde_json::Error,
    },

    #[error("built-in ignore pattern for {language} does not compile: {source}")]
    InvalidIgnorePattern {
        language: String,
        source: regex::Error,
    },
}

impl ConfigError {
    /// Whether resolution already reported this error through the
    /// [`Console`], together with its remediation hint.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::MissingLanguage | Self::UnknownLanguage(_))
    }
}

/// Runtime overrides supplied by the caller (usually CLI flags).
///
/// Unset fields never erase values coming from the document or defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grading: Option<Grading>,
    pub editor: Option<Editor>,
    pub language: Option<String>,
    pub disable_grading: Option<bool>,
}

impl Overrides {
    /// Overrides applied on top of the document.
    fn document_layer(&self) -> Result<Layer, ConfigError> {
        let mut layer = Layer::new();
        layer
            .set_opt(KEY_LANGUAGE, self.language.as_deref())
            .and_then(|l| l.set_opt(KEY_DISABLE_GRADING, self.disable_grading))
            .map_err(ConfigError::Serialize)?;
        Ok(layer)
    }

    /// Overrides re-applied last so they beat anything the defaults set.
    fn mode_layer(&self) -> Result<Layer, ConfigError> {
        let mut layer = Layer::new();
        layer
            .set_opt(KEY_GRADING, self.grading.as_ref())
            .and_then(|l| l.set_opt(KEY_EDITOR, self.editor))
            .map_err(ConfigError::Serialize)?;
        Ok(layer)
    }
}

/// Resolved workspace configuration.
///
/// Keys this crate does not know about are kept in `extra` and written
/// back on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    #[serde(default)]
    pub grading: Grading,

    #[serde(default)]
    pub editor: Editor,

    #[serde(rename = "disable_grading", default, skip_serializing_if = "Option::is_none")]
    pub disable_grading: Option<bool>,

    /// Pattern hiding files from listings. Never persisted.
    #[serde(skip)]
    pub ignore_regex: Option<Regex>,

    /// Derived from `grading` and the project root; recomputed on load.
    #[serde(skip_deserializing)]
    pub exercises_path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Config {
    /// The language or compiler identifier used for the defaults lookup.
    pub fn language_key(&self) -> Option<&str> {
        self.language.as_deref().or(self.compiler.as_deref())
    }

    /// Look up an indexed exercise by slug.
    pub fn find_exercise(&self, slug: &str) -> Option<&Exercise> {
        self.exercises
            .as_deref()
            .and_then(|list| list.iter().find(|ex| ex.slug == slug))
    }
}

/// Exercise root for the given grading mode.
///
/// Only `isolated` grading uses `exercises/`; every other mode works out
/// of the state directory.
pub fn exercises_path(root: &Path, grading: &Grading) -> PathBuf {
    match grading {
        Grading::Isolated => root.join(ISOLATED_EXERCISES_DIR),
        Grading::Incremental | Grading::Other(_) => root.join(STATE_EXERCISES_DIR),
    }
}

/// Resolve the configuration for the project rooted at `root`.
///
/// Returns the configuration together with the document it was (or will
/// be) persisted to. May create `<root>/.breathecode`.
pub fn resolve(
    root: &Path,
    overrides: &Overrides,
    console: &dyn Console,
    probe: &dyn EditorProbe,
) -> Result<(Config, ConfigDocument), ConfigError> {
    let document = ConfigDocument::locate(root);

    let mut doc_values = if document.exists() {
        let values = Layer::from(document.read()?);
        let merged = merge_layers([&values, &overrides.document_layer()?]);
        console.debug(&format!(
            "This is your configuration file ({}): {}",
            document.path().display(),
            Value::Object(merged.clone())
        ));
        merged
    } else {
        let state_dir = root.join(STATE_DIR);
        std::fs::create_dir_all(&state_dir).map_err(|e| ConfigError::CreateDir {
            path: state_dir,
            source: e,
        })?;
        let mut start = Layer::new();
        start
            .set_opt(KEY_LANGUAGE, overrides.language.as_deref())
            .map_err(ConfigError::Serialize)?;
        start.into_inner()
    };

    let defaults = match lookup_defaults(&doc_values) {
        Ok(defaults) => defaults,
        Err(e) => {
            console.error(&e.to_string());
            if matches!(e, ConfigError::UnknownLanguage(_)) {
                console.help(&format!(
                    "Available languages: {}",
                    defaults::list_names().join(", ")
                ));
            }
            return Err(e);
        }
    };

    if !has_editor(&doc_values) && overrides.editor.is_none() {
        let editor = if probe.is_editor_tool_available() {
            Editor::Gitpod
        } else {
            Editor::Standalone
        };
        console.debug(&format!("No editor configured, detected {editor}"));
        doc_values.insert(KEY_EDITOR.to_string(), Value::String(editor.to_string()));
    }

    for key in [KEY_LANGUAGE, KEY_COMPILER] {
        if doc_values
            .get(key)
            .is_some_and(|v| !v.is_string() && !v.is_null())
        {
            doc_values.shift_remove(key);
            console.debug(&format!("Ignoring non-string {key} in the configuration file"));
        }
    }

    if doc_values.shift_remove(KEY_IGNORE_REGEX).is_some() {
        console.debug("Discarding persisted ignoreRegex: JSON cannot carry a compiled pattern");
    }

    let default_values = defaults
        .values()
        .map_err(|e| ConfigError::InvalidDefaults {
            language: defaults.name.to_string(),
            source: e,
        })?;
    let mut merged = merge_layers([
        &Layer::from(default_values),
        &Layer::from(doc_values),
        &overrides.mode_layer()?,
    ]);
    merged.shift_remove(KEY_EXERCISES_PATH);

    let mut config: Config =
        serde_json::from_value(Value::Object(merged)).map_err(|e| ConfigError::InvalidField {
            path: document.path().to_path_buf(),
            source: e,
        })?;
    config.ignore_regex =
        defaults
            .ignore_regex()
            .map_err(|e| ConfigError::InvalidIgnorePattern {
                language: defaults.name.to_string(),
                source: e,
            })?;
    config.exercises_path = exercises_path(root, &config.grading);

    console.debug(&format!(
        "Resolved configuration for {}: grading={}, editor={}, exercises at {}",
        defaults.name,
        config.grading,
        config.editor,
        config.exercises_path.display()
    ));

    if config.grading == Grading::Isolated && !config.exercises_path.exists() {
        return Err(ConfigError::MissingExercisesDirectory {
            grading: config.grading,
            path: config.exercises_path,
        });
    }

    Ok((config, document))
}

/// Pick the defaults entry named by `language`, falling back to `compiler`.
fn lookup_defaults(values: &Map<String, Value>) -> Result<&'static LanguageDefaults, ConfigError> {
    let key = [KEY_LANGUAGE, KEY_COMPILER]
        .iter()
        .find_map(|k| values.get(*k).and_then(Value::as_str))
        .ok_or(ConfigError::MissingLanguage)?;

    defaults::lookup(key).ok_or_else(|| ConfigError::UnknownLanguage(key.to_string()))
}

fn has_editor(values: &Map<String, Value>) -> bool {
    match values.get(KEY_EDITOR) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Level, MemoryConsole};
    use crate::probe::StaticProbe;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("exercises")).unwrap();
        dir
    }

    fn language(name: &str) -> Overrides {
        Overrides {
            language: Some(name.to_string()),
            ..Overrides::default()
        }
    }

    fn run(root: &Path, overrides: &Overrides) -> Result<Config, ConfigError> {
        resolve(root, overrides, &MemoryConsole::new(), &StaticProbe(false)).map(|(c, _)| c)
    }

    #[test]
    fn resolves_from_language_override_alone() {
        let dir = project();
        let config = run(dir.path(), &language("node")).unwrap();

        assert_eq!(config.language.as_deref(), Some("node"));
        assert_eq!(config.grading, Grading::Isolated);
        assert_eq!(config.editor, Editor::Standalone);
        assert_eq!(config.exercises_path, dir.path().join("exercises"));
        assert!(dir.path().join(".breathecode").is_dir());
    }

    #[test]
    fn missing_language_is_reported() {
        let dir = project();
        let console = MemoryConsole::new();
        let err = resolve(dir.path(), &Overrides::default(), &console, &StaticProbe(false))
            .unwrap_err();

        assert!(matches!(err, ConfigError::MissingLanguage));
        let errors = console.messages(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("--language"));
    }

    #[test]
    fn missing_language_in_document() {
        let dir = project();
        std::fs::write(dir.path().join("bc.json"), r#"{"grading": "isolated"}"#).unwrap();
        let err = run(dir.path(), &Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingLanguage));
    }

    #[test]
    fn unknown_language_fails() {
        let dir = project();
        let err = run(dir.path(), &language("cobol")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(ref l) if l == "cobol"));
    }

    #[test]
    fn compiler_is_used_when_language_absent() {
        let dir = project();
        std::fs::write(dir.path().join("bc.json"), r#"{"compiler": "python3"}"#).unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.language_key(), Some("python3"));
        assert_eq!(config.extra["tester"], "pytest");
    }

    #[test]
    fn language_preferred_over_compiler() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "html", "compiler": "node"}"#,
        )
        .unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert!(config.ignore_regex.is_some(), "html defaults should apply");
    }

    #[test]
    fn document_language_overridden_by_flag() {
        let dir = project();
        std::fs::write(dir.path().join("bc.json"), r#"{"language": "node"}"#).unwrap();
        let config = run(dir.path(), &language("python3")).unwrap();
        assert_eq!(config.language.as_deref(), Some("python3"));
    }

    #[test]
    fn unset_overrides_keep_document_values() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "disable_grading": true, "editor": "gitpod"}"#,
        )
        .unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.disable_grading, Some(true));
        assert_eq!(config.editor, Editor::Gitpod);
    }

    #[test]
    fn grading_override_beats_document_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "grading": "isolated"}"#,
        )
        .unwrap();
        let overrides = Overrides {
            grading: Some(Grading::Incremental),
            ..Overrides::default()
        };
        let config = run(dir.path(), &overrides).unwrap();
        assert_eq!(config.grading, Grading::Incremental);
        assert_eq!(config.exercises_path, dir.path().join(".breathecode/exercises"));
    }

    #[test]
    fn editor_detected_from_probe() {
        let dir = project();
        let (config, _) =
            resolve(dir.path(), &language("node"), &MemoryConsole::new(), &StaticProbe(true))
                .unwrap();
        assert_eq!(config.editor, Editor::Gitpod);
    }

    #[test]
    fn editor_override_beats_probe_and_document() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "editor": "gitpod"}"#,
        )
        .unwrap();
        let overrides = Overrides {
            editor: Some(Editor::Standalone),
            ..Overrides::default()
        };
        let (config, _) =
            resolve(dir.path(), &overrides, &MemoryConsole::new(), &StaticProbe(true)).unwrap();
        assert_eq!(config.editor, Editor::Standalone);
    }

    #[test]
    fn persisted_ignore_regex_is_discarded() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "ignoreRegex": {}}"#,
        )
        .unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert!(config.ignore_regex.is_none());
        assert!(!config.extra.contains_key("ignoreRegex"));
    }

    #[test]
    fn persisted_exercises_path_is_recomputed() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "exercisesPath": "/somewhere/else"}"#,
        )
        .unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.exercises_path, dir.path().join("exercises"));
        assert!(!config.extra.contains_key("exercisesPath"));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "title": "Learn Node", "difficulty": 3}"#,
        )
        .unwrap();
        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.extra["title"], json!("Learn Node"));
        assert_eq!(config.extra["difficulty"], json!(3));
    }

    #[test]
    fn isolated_without_exercises_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), &language("node")).unwrap_err();
        match err {
            ConfigError::MissingExercisesDirectory { grading, path } => {
                assert_eq!(grading, Grading::Isolated);
                assert_eq!(path, dir.path().join("exercises"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_document_fails_to_parse() {
        let dir = project();
        std::fs::write(dir.path().join(".bc.json"), "{\"language\": ").unwrap();
        let err = run(dir.path(), &language("node")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn other_grading_mode_uses_state_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "grading": "no-grading"}"#,
        )
        .unwrap();

        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.grading, Grading::Other("no-grading".to_string()));
        assert_eq!(config.exercises_path, dir.path().join(".breathecode/exercises"));
        assert!(!config.exercises_path.exists());
        assert_eq!(serde_json::to_value(&config).unwrap()["grading"], json!("no-grading"));
    }

    #[test]
    fn wrongly_typed_grading_is_rejected() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "node", "grading": 3}"#,
        )
        .unwrap();
        let err = run(dir.path(), &Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { .. }));
    }

    #[test]
    fn non_string_language_falls_back_to_compiler() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": 5, "compiler": "node"}"#,
        )
        .unwrap();

        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.language_key(), Some("node"));
        assert_eq!(config.language.as_deref(), Some("node"));
        assert_eq!(config.compiler.as_deref(), Some("node"));
    }

    #[test]
    fn non_string_compiler_is_ignored() {
        let dir = project();
        std::fs::write(
            dir.path().join("bc.json"),
            r#"{"language": "python3", "compiler": ["python3"]}"#,
        )
        .unwrap();

        let config = run(dir.path(), &Overrides::default()).unwrap();
        assert_eq!(config.compiler.as_deref(), Some("python3"));
    }

    #[test]
    fn only_language_errors_are_reported_through_the_console() {
        assert!(ConfigError::MissingLanguage.is_reported());
        assert!(ConfigError::UnknownLanguage("cobol".to_string()).is_reported());
        assert!(!ConfigError::NotAnObject { path: PathBuf::from("bc.json") }.is_reported());
    }

    #[test]
    fn existing_state_directory_is_not_an_error() {
        let dir = project();
        std::fs::create_dir(dir.path().join(".breathecode")).unwrap();
        assert!(run(dir.path(), &language("node")).is_ok());
    }

    #[test]
    fn config_is_superset_of_defaults_for_every_language() {
        for name in defaults::list_names() {
            let dir = project();
            let config = run(dir.path(), &language(name)).unwrap();
            let value = serde_json::to_value(&config).unwrap();
            for (key, expected) in defaults::lookup(name).unwrap().values().unwrap() {
                assert_eq!(value.get(&key), Some(&expected), "{name}: {key}");
            }
            assert!(value.get("grading").is_some());
            assert!(value.get("editor").is_some());
        }
    }
}
