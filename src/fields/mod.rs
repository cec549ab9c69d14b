//! Structured field builders.
//!
//! # Responsibilities
//! - Hold the field map attached to an [`Entry`](crate::Entry)
//! - Compute caller fields (`caller`, `callerLine`)
//! - Compute status fields (`statusCode`, `status`, plus extra messages)
//!
//! # Design Decisions
//! - Builders are pure functions; layering happens in the entry
//! - Values are `serde_json::Value` so integers, strings and sequences share one map
//! - A single extra message is stored under `error` as a one-element sequence,
//!   several messages under `msg(1)`, `msg(2)`, ... as scalars. Existing log
//!   consumers depend on both shapes.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Source file of the call site.
pub const CALLER: &str = "caller";

/// Line number of the call site.
pub const CALLER_LINE: &str = "callerLine";

/// Numeric HTTP status code.
pub const STATUS_CODE: &str = "statusCode";

/// Status line, e.g. `404 Not Found`.
pub const STATUS: &str = "status";

/// Single extra message (stored as a one-element sequence).
pub const ERROR: &str = "error";

/// Key for the `n`-th (1-indexed) message when several are attached.
pub fn message_key(n: usize) -> String {
    format!("msg({})", n)
}

/// Mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a field, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Return a copy of `self` with `other` layered on top.
    ///
    /// On key collision the value from `other` wins. `self` is left untouched.
    pub fn layered(&self, other: &Fields) -> Fields {
        let mut merged = self.0.clone();
        merged.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Fields(merged)
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Fields {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extra messages attached to status fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Messages {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl Messages {
    /// Collapse `Multiple` by count: zero messages is `None`, one is `Single`.
    pub fn normalized(self) -> Self {
        match self {
            Messages::Multiple(mut msgs) if msgs.len() <= 1 => match msgs.pop() {
                Some(msg) => Messages::Single(msg),
                None => Messages::None,
            },
            other => other,
        }
    }
}

impl From<String> for Messages {
    fn from(msg: String) -> Self {
        Messages::Single(msg)
    }
}

impl From<&str> for Messages {
    fn from(msg: &str) -> Self {
        Messages::Single(msg.to_string())
    }
}

impl From<Vec<String>> for Messages {
    fn from(msgs: Vec<String>) -> Self {
        Messages::Multiple(msgs).normalized()
    }
}

impl<const N: usize> From<[&str; N]> for Messages {
    fn from(msgs: [&str; N]) -> Self {
        Messages::from(msgs.iter().map(|m| m.to_string()).collect::<Vec<_>>())
    }
}

/// Fields describing a call site.
pub fn caller_fields(location: &str, line: u32) -> Fields {
    let mut fields = Fields::new();
    fields.insert(CALLER, location);
    fields.insert(CALLER_LINE, line);
    fields
}

/// Fields describing an HTTP status, optionally with extra messages.
pub fn status_fields(status_code: u16, status: &str, messages: impl Into<Messages>) -> Fields {
    let mut fields = Fields::new();
    fields.insert(STATUS_CODE, status_code);
    fields.insert(STATUS, status);

    match messages.into().normalized() {
        Messages::None => {}
        Messages::Single(msg) => {
            fields.insert(ERROR, Value::Array(vec![Value::String(msg)]));
        }
        Messages::Multiple(msgs) => {
            for (i, msg) in msgs.into_iter().enumerate() {
                fields.insert(message_key(i + 1), msg);
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caller_fields() {
        let fields = caller_fields("src/main.rs", 42);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(CALLER), Some(&json!("src/main.rs")));
        assert_eq!(fields.get(CALLER_LINE), Some(&json!(42)));
    }

    #[test]
    fn test_status_fields_without_messages() {
        let fields = status_fields(404, "404 Not Found", Messages::None);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(STATUS_CODE), Some(&json!(404)));
        assert_eq!(fields.get(STATUS), Some(&json!("404 Not Found")));
    }

    #[test]
    fn test_single_message_is_a_sequence() {
        let fields = status_fields(200, "OK", "a");
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"statusCode": 200, "status": "OK", "error": ["a"]})
        );
    }

    #[test]
    fn test_multiple_messages_are_indexed() {
        let fields = status_fields(200, "OK", ["a", "b"]);
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"statusCode": 200, "status": "OK", "msg(1)": "a", "msg(2)": "b"})
        );
        assert!(!fields.contains_key(ERROR));
    }

    #[test]
    fn test_multiple_with_one_message_uses_error_key() {
        let fields = status_fields(500, "500 Internal Server Error", Messages::Multiple(vec!["x".into()]));
        assert_eq!(fields.get(ERROR), Some(&json!(["x"])));
        assert!(!fields.contains_key("msg(1)"));

        let fields = status_fields(500, "500 Internal Server Error", Messages::Multiple(vec![]));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_layered_prefers_new_values() {
        let base: Fields = [("a", json!(1)), ("b", json!(2))].into_iter().collect();
        let top: Fields = [("b", json!(3)), ("c", json!(4))].into_iter().collect();

        let merged = base.layered(&top);
        assert_eq!(merged.get("a"), Some(&json!(1)));
        assert_eq!(merged.get("b"), Some(&json!(3)));
        assert_eq!(merged.get("c"), Some(&json!(4)));
        // base is untouched
        assert_eq!(base.get("b"), Some(&json!(2)));
        assert!(!base.contains_key("c"));
    }

    #[test]
    fn test_display_renders_json() {
        let fields = caller_fields("lib.rs", 7);
        assert_eq!(fields.to_string(), r#"{"caller":"lib.rs","callerLine":7}"#);
    }
}
