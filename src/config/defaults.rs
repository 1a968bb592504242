//! Built-in per-language configuration defaults.
//!
//! Each entry's baseline values are embedded via `include_str!` so they
//! ship with the binary. Ignore patterns live next to the JSON rather than
//! inside it: a JSON document cannot carry a compiled pattern.

use regex::Regex;
use serde_json::{Map, Value};

/// An immutable baseline configuration for one language or compiler.
#[derive(Debug)]
pub struct LanguageDefaults {
    /// Identifier matched against `language` / `compiler`.
    pub name: &'static str,
    document: &'static str,
    ignore_pattern: Option<&'static str>,
}

impl LanguageDefaults {
    /// Baseline values as a JSON object.
    pub fn values(&self) -> Result<Map<String, Value>, serde_json::Error> {
        serde_json::from_str(self.document)
    }

    /// Pattern hiding files that do not belong to this track.
    pub fn ignore_regex(&self) -> Result<Option<Regex>, regex::Error> {
        self.ignore_pattern.map(Regex::new).transpose()
    }
}

/// Hides JavaScript sources from tracks that are not about JavaScript.
const HIDE_JS: &str = r"\.js$";

static DEFAULTS: &[LanguageDefaults] = &[
    LanguageDefaults {
        name: "node",
        document: include_str!("defaults/node.json"),
        ignore_pattern: None,
    },
    LanguageDefaults {
        name: "python3",
        document: include_str!("defaults/python3.json"),
        ignore_pattern: None,
    },
    LanguageDefaults {
        name: "java",
        document: include_str!("defaults/java.json"),
        ignore_pattern: None,
    },
    LanguageDefaults {
        name: "vanillajs",
        document: include_str!("defaults/vanillajs.json"),
        ignore_pattern: None,
    },
    LanguageDefaults {
        name: "react",
        document: include_str!("defaults/react.json"),
        ignore_pattern: None,
    },
    LanguageDefaults {
        name: "html",
        document: include_str!("defaults/html.json"),
        ignore_pattern: Some(HIDE_JS),
    },
    LanguageDefaults {
        name: "css",
        document: include_str!("defaults/css.json"),
        ignore_pattern: Some(HIDE_JS),
    },
];

/// Get the defaults entry for a language or compiler name.
pub fn lookup(name: &str) -> Option<&'static LanguageDefaults> {
    DEFAULTS.iter().find(|d| d.name == name)
}

/// List all known language and compiler names.
pub fn list_names() -> Vec<&'static str> {
    DEFAULTS.iter().map(|d| d.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults_parse() {
        for entry in DEFAULTS {
            let parsed: Value = serde_json::from_str(entry.document)
                .unwrap_or_else(|e| panic!("defaults for '{}' failed to parse: {e}", entry.name));
            let values = parsed.as_object().expect("defaults must be an object");
            assert!(values.contains_key("grading"), "{} has no grading", entry.name);
            assert_eq!(values["compiler"], entry.name);
        }
    }

    #[test]
    fn all_ignore_patterns_compile() {
        for entry in DEFAULTS {
            if entry.ignore_pattern.is_some() {
                assert!(
                    matches!(entry.ignore_regex(), Ok(Some(_))),
                    "{} pattern is invalid",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn unknown_language_returns_none() {
        assert!(lookup("cobol").is_none());
    }

    #[test]
    fn html_hides_javascript() {
        let re = lookup("html").unwrap().ignore_regex().unwrap().unwrap();
        assert!(re.is_match("app.js"));
        assert!(!re.is_match("app.json"));
        assert!(lookup("node").unwrap().ignore_regex().unwrap().is_none());
    }

    #[test]
    fn malformed_entries_surface_errors() {
        let broken = LanguageDefaults {
            name: "broken",
            document: "[\"not\", \"an\", \"object\"]",
            ignore_pattern: Some("(unclosed"),
        };
        assert!(broken.values().is_err());
        assert!(broken.ignore_regex().is_err());
    }

    #[test]
    fn list_names_contains_every_entry() {
        let names = list_names();
        assert_eq!(names.len(), DEFAULTS.len());
        assert!(names.contains(&"python3"));
        assert!(names.contains(&"html"));
    }
}
