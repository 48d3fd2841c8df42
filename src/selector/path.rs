//! Component path parsing
//!
//! A component path is a space-separated list of component tag names. Token
//! order encodes required ancestor-descendant nesting among matched
//! instances: `"list item"` matches every `item` component with a `list`
//! component somewhere above it, at any depth.

use crate::error::{Error, Result};

/// Ordered component tag-name tokens parsed from a selector string
///
/// Tokens are trimmed and lowercased; empty tokens are discarded. An
/// all-whitespace selector parses to an empty path, which matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPath {
    tokens: Vec<String>,
}

impl ComponentPath {
    /// Parse a selector string into a component path
    pub fn parse(selector: &str) -> Self {
        let tokens = selector
            .split_whitespace()
            .map(|token| token.trim().to_lowercase())
            .collect();

        Self { tokens }
    }

    /// Get the token at the given cursor position
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens in the path
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the path has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the given cursor position is the last token
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.tokens.len()
    }
}

/// Validate an untyped selector argument at the wire/scripting boundary
///
/// JSON `null` means "no selector"; a JSON string is the selector. Any other
/// defined value is a usage error and is rejected before a single script is
/// evaluated.
pub fn selector_from_value(value: &serde_json::Value) -> Result<Option<String>> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(selector) => Ok(Some(selector.clone())),
        other => Err(Error::invalid_selector(format!(
            "If the selector parameter is passed it should be a string, but it was {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
