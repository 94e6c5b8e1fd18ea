//! Decoding style trees from JSON.
//!
//! Key order is taken from the document (`serde_json` is built with
//! `preserve_order`), so class numbering follows the source.

use serde_json::Value;

use crate::error::StyleError;
use crate::types::value::{StyleTree, StyleValue};

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StyleValue::Null,
            Value::Bool(b) => StyleValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(StyleValue::Null, StyleValue::Number),
            Value::String(s) => StyleValue::Text(s),
            Value::Array(items) => StyleValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => StyleValue::Nested(map.into_iter().collect()),
        }
    }
}

impl TryFrom<Value> for StyleTree {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match StyleValue::from(value) {
            StyleValue::Nested(tree) => Ok(tree),
            other => Err(StyleError::NotAnObject(other.kind())),
        }
    }
}

impl StyleTree {
    /// Parses a JSON object into a style tree.
    ///
    /// ```rust
    /// use atomcss::StyleTree;
    ///
    /// let tree = StyleTree::from_json(r#"{"color": "gold", "margin": 0}"#).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let value: Value = serde_json::from_str(source)?;
        StyleTree::try_from(value)
    }
}
