//! Positional argument tuples for intercepted calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The ordered positional arguments of one intercepted call.
///
/// Call data is dynamically shaped, so arguments are carried as
/// [`serde_json::Value`]s. A pre-hook replaces the whole tuple or leaves it
/// untouched; the framework never inspects individual elements, and typed
/// getters exist only for hook convenience. Argument shape is not validated:
/// a mis-shaped tuple surfaces downstream as a `None` from a getter, not as
/// an engine error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallArgs(Vec<Value>);

impl CallArgs {
    /// Create an empty argument tuple.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a tuple from prepared values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Appends an argument, builder-style.
    pub fn with(mut self, value: Value) -> Self {
        self.0.push(value);
        self
    }

    /// Number of positional arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the tuple is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an argument by position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Gets a string argument.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    /// Gets an i64 argument.
    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(Value::as_i64)
    }

    /// Gets an f64 argument.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(Value::as_f64)
    }

    /// Gets a bool argument.
    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(Value::as_bool)
    }

    /// Iterates the arguments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Consumes the tuple, returning the raw values.
    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for CallArgs {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for CallArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_getters() {
        let args = CallArgs::new()
            .with(json!("report.pdf"))
            .with(json!(42))
            .with(json!(true));

        assert_eq!(args.len(), 3);
        assert_eq!(args.get_str(0), Some("report.pdf"));
        assert_eq!(args.get_i64(1), Some(42));
        assert_eq!(args.get_bool(2), Some(true));
    }

    #[test]
    fn test_mismatched_getter_returns_none() {
        let args = CallArgs::from_values(vec![json!("text")]);
        assert_eq!(args.get_i64(0), None);
        assert_eq!(args.get_str(5), None);
    }
}
