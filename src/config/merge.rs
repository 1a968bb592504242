//! Ordered merge of partial configuration records.
//!
//! Layers are applied left to right: later layers win for every key they
//! carry, and keys a layer does not carry are never erased. Callers build
//! override layers with [`Layer::set_opt`] so unset overrides stay absent.

use serde::Serialize;
use serde_json::{Map, Value};

/// A partial configuration record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer(pub Map<String, Value>);

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` only when it is present.
    pub fn set_opt<T: Serialize>(
        &mut self,
        key: &str,
        value: Option<T>,
    ) -> Result<&mut Self, serde_json::Error> {
        if let Some(value) = value {
            self.0.insert(key.to_string(), serde_json::to_value(value)?);
        }
        Ok(self)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Layer {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Shallow right-biased merge of `layers` into a fresh record.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a Layer>) -> Map<String, Value> {
    let mut merged = Map::new();
    for layer in layers {
        for (key, value) in &layer.0 {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
