//! Spec tree value type.
//!
//! Scraped specification sheets arrive as loosely-typed nested data:
//! numbers, strings that hold numbers, booleans in half a dozen
//! spellings, lists of feature names, and sub-maps. `SpecValue` models
//! that tree and centralizes the loose coercions so the comparators can
//! stay strict.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a product's specification tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<SpecValue>),
    Map(BTreeMap<String, SpecValue>),
}

impl SpecValue {
    /// Creates an empty map node.
    pub fn empty_map() -> Self {
        SpecValue::Map(BTreeMap::new())
    }

    /// Converts from a JSON value. Null becomes an empty string, which
    /// the resolver treats as absent.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => SpecValue::Text(String::new()),
            serde_json::Value::Bool(b) => SpecValue::Bool(b),
            serde_json::Value::Number(n) => SpecValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => SpecValue::Text(s),
            serde_json::Value::Array(items) => {
                SpecValue::List(items.into_iter().map(SpecValue::from_json).collect())
            }
            serde_json::Value::Object(map) => SpecValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, SpecValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Walks a dotted path through nested maps.
    pub fn get_path(&self, path: &str) -> Option<&SpecValue> {
        let mut current = self;
        for segment in path.split('.') {
            match current {
                SpecValue::Map(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Looks up a single key at this level only, without splitting on dots.
    ///
    /// Pre-computed fields are sometimes stored flat under their full
    /// dotted name at the tree root.
    pub fn get_flat(&self, key: &str) -> Option<&SpecValue> {
        match self {
            SpecValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Numeric view: numbers directly, numeric text parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) if n.is_finite() => Some(*n),
            SpecValue::Text(s) => {
                let trimmed = s.trim().replace(',', "");
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Text view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpecValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// List view.
    pub fn as_list(&self) -> Option<&[SpecValue]> {
        match self {
            SpecValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Loose boolean coercion: `true`, `1`, `"1"`, `"yes"`, `"true"`
    /// (case-insensitive) are all truthy. Anything else is falsy.
    pub fn as_bool_loose(&self) -> bool {
        match self {
            SpecValue::Bool(b) => *b,
            SpecValue::Number(n) => *n == 1.0,
            SpecValue::Text(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "yes" | "true")
            }
            _ => false,
        }
    }

    /// True for the absent-value sentinels: empty text and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            SpecValue::Text(s) => s.trim().is_empty(),
            SpecValue::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        SpecValue::Number(n)
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::Text(s.to_string())
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        SpecValue::Bool(b)
    }
}
