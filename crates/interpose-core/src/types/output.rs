//! The uniform output envelope for intercepted calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of an intercepted call: an ordered sequence of values.
///
/// Arity 0 is the explicit no-value marker, arity 1 a scalar result, and
/// arity 2 or more a tuple result. Post-hooks always receive the whole
/// envelope, whatever its arity; a "falsy" scalar such as `0` is an ordinary
/// arity-1 envelope, distinct from [`Output::none`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Output(Vec<Value>);

impl Output {
    /// The no-value marker.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// A single-value result.
    pub fn scalar(value: Value) -> Self {
        Self(vec![value])
    }

    /// A multi-value (tuple) result.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Returns whether this envelope carries no value.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of values carried.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// The single carried value, if the arity is exactly 1.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self.0.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }

    /// Gets a carried value by position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Iterates the carried values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Consumes the envelope, returning the raw values.
    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<Value>> for Output {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arity_distinguishes_none_scalar_and_tuple() {
        assert!(Output::none().is_none());
        assert_eq!(Output::none().arity(), 0);

        let scalar = Output::scalar(json!(6));
        assert_eq!(scalar.arity(), 1);
        assert_eq!(scalar.as_scalar(), Some(&json!(6)));

        let tuple = Output::from_values(vec![json!(1), json!(2)]);
        assert_eq!(tuple.arity(), 2);
        assert_eq!(tuple.as_scalar(), None);
    }

    #[test]
    fn test_falsy_scalar_is_not_the_no_value_marker() {
        let zero = Output::scalar(json!(0));
        assert!(!zero.is_none());
        assert_ne!(zero, Output::none());
    }
}
