//! Convenience result type alias for Interpose.

use crate::error::InterceptError;

/// A specialized `Result` type for intercepted calls and hook callables.
///
/// This is defined as a convenience so that hook signatures do not need to
/// write `Result<T, InterceptError>` explicitly.
pub type InterceptResult<T> = Result<T, InterceptError>;
