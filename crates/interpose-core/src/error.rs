//! Unified error types for Interpose.
//!
//! Hook callables and base implementations report their own failures as
//! [`InterceptError`] so everything propagates through the ? operator.

use thiserror::Error;

use crate::types::op::OpName;

/// The unified error for intercepted calls.
///
/// The dispatch engine itself only ever produces
/// [`OverrideConflict`](InterceptError::OverrideConflict). The
/// [`Plugin`](InterceptError::Plugin) variant belongs to hook and base
/// implementations; the engine propagates it untouched, without wrapping or
/// translation.
#[derive(Debug, Error)]
pub enum InterceptError {
    /// Two plugins claimed the override for the same operation.
    ///
    /// Detected before any hook runs; fatal to the call.
    #[error(
        "only one plugin can override operation '{op}': plugin '{second}' is \
         trying to override it, but plugin '{first}' already did"
    )]
    OverrideConflict {
        /// The contested operation.
        op: OpName,
        /// The plugin that claimed the override first, in sequence order.
        first: String,
        /// The plugin that tried to claim it afterwards.
        second: String,
    },

    /// A failure inside a hook, override, or base implementation.
    #[error("{message}")]
    Plugin {
        /// A human-readable error message.
        message: String,
        /// Optional underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InterceptError {
    /// Create a plugin-side error from a message.
    pub fn plugin(message: impl Into<String>) -> Self {
        Self::Plugin {
            message: message.into(),
            source: None,
        }
    }

    /// Create a plugin-side error with an underlying cause.
    pub fn plugin_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Plugin {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an override-conflict error for `op`.
    pub fn override_conflict(
        op: OpName,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::OverrideConflict {
            op,
            first: first.into(),
            second: second.into(),
        }
    }
}

impl From<serde_json::Error> for InterceptError {
    fn from(err: serde_json::Error) -> Self {
        Self::plugin_with_source(format!("JSON error: {err}"), err)
    }
}
