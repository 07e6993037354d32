//! Query parameters of a Bot API request.

use serde::Serialize;
use serde_json::Value;
use silbot_core::helper::{to_json_string, to_json_value};

/// Insertion-ordered query parameters, already rendered to strings.
///
/// Strings go out verbatim, numbers and booleans in their JSON form, and
/// records or lists as one JSON-encoded value each. Values that flatten to
/// `null` are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.remove(key);
        if let Some(rendered) = render(value) {
            self.0.push((key.to_string(), rendered));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Builder form of [`Params::insert`].
    pub fn set<T: Serialize>(mut self, key: &str, value: T) -> Self {
        self.insert(key, &value);
        self
    }

    /// Set `key` only when `value` is `Some`.
    pub fn opt<T: Serialize>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.insert(key, &value);
        }
        self
    }

    /// Set `key` to `value`, or to `fallback` when `value` is `None`.
    pub fn or_default<T: Serialize>(self, key: &str, value: Option<T>, fallback: Option<T>) -> Self {
        self.opt(key, value.or(fallback))
    }

    /// Insert every top-level field of a flattened record as its own
    /// parameter.
    pub fn merge<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        if let Value::Object(fields) = to_json_value(value) {
            for (key, field) in &fields {
                self.insert(key, field);
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Key/value pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Records and lists are encoded from `value` itself so struct field order
/// survives; the `Value` form only classifies.
fn render<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match to_json_value(value) {
        Value::Null => None,
        Value::String(s) => Some(s),
        scalar @ (Value::Bool(_) | Value::Number(_)) => Some(scalar.to_string()),
        Value::Array(_) | Value::Object(_) => Some(to_json_string(value)),
    }
}
