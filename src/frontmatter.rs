//! Markdown + YAML frontmatter parser for exercise READMEs.
//!
//! Uses `serde_yaml_ng` for the metadata block. A README without a
//! leading `---` block is valid: its attributes are empty and the whole
//! text is the body.

use serde::Serialize;
use serde_json::{Map, Value};

/// A README split into frontmatter attributes and markdown body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readme {
    /// Metadata from the YAML frontmatter.
    pub attributes: Map<String, Value>,
    /// Markdown after the closing delimiter.
    pub body: String,
}

/// Parse markdown with optional YAML frontmatter.
///
/// Expected format:
/// ```markdown
/// ---
/// title: Hello World
/// intro: https://example.com/video
/// ---
///
/// # Hello World
/// ```
pub fn parse_readme(content: &str) -> Result<Readme, String> {
    let Some((frontmatter, body)) = split_frontmatter(content) else {
        return Ok(Readme {
            attributes: Map::new(),
            body: content.to_string(),
        });
    };

    let attributes = if frontmatter.trim().is_empty() {
        Map::new()
    } else {
        match serde_yaml_ng::from_str::<Value>(frontmatter)
            .map_err(|e| format!("invalid frontmatter: {e}"))?
        {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return Err("frontmatter must be a YAML mapping".to_string()),
        }
    };

    Ok(Readme {
        attributes,
        body: body.to_string(),
    })
}

/// Split content into YAML frontmatter and markdown body.
///
/// Returns `None` when the content does not open with a `---` line or the
/// block is never closed.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let (opening, after_open) = rest.split_once('\n')?;
    if !opening.trim().is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        let marker = line.trim_end();
        if marker == "---" || marker == "..." {
            let frontmatter = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Some((frontmatter, body));
        }
        offset += line.len();
    }

    None
}
