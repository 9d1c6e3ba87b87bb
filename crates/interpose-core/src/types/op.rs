//! Logical operation names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The logical name of an interceptable operation.
///
/// Derived from a method's declared name by stripping every leading
/// underscore, so a private method is hooked under its public-facing name:
/// `_save`, `__save`, and `save` all resolve to the operation `save`.
/// Normalization happens exactly once, in the constructor; two `OpName`s
/// compare equal iff their normalized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpName(String);

impl OpName {
    /// Create an operation name from a declared method name.
    pub fn new(declared: &str) -> Self {
        Self(declared.trim_start_matches('_').to_string())
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OpName {
    fn from(declared: &str) -> Self {
        Self::new(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_any_number_of_leading_underscores() {
        assert_eq!(OpName::new("save"), OpName::new("_save"));
        assert_eq!(OpName::new("save"), OpName::new("__save"));
        assert_eq!(OpName::new("___save").as_str(), "save");
    }

    #[test]
    fn test_interior_underscores_are_kept() {
        assert_eq!(OpName::new("_bulk_delete").as_str(), "bulk_delete");
    }

    #[test]
    fn test_all_underscore_name_resolves_to_empty() {
        assert_eq!(OpName::new("__").as_str(), "");
    }
}
