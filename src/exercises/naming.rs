//! Exercise directory naming convention.
//!
//! Two digits, an optional `.N` or `.NN` minor number, a hyphen, then
//! letters optionally joined by single hyphens or underscores:
//! `01-hello-world`, `02.3-variables`, `10.12-x`.

use std::sync::LazyLock;

use regex::Regex;

static EXERCISE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}(?:\.[0-9]{1,2})?-[A-Za-z](?:[-_]?[A-Za-z]+)*$").unwrap()
});

/// Returns `true` if `name` follows the exercise naming convention.
pub fn is_valid_exercise_name(name: &str) -> bool {
    EXERCISE_NAME_RE.is_match(name)
}
