//! Convenience macros for intercepted methods.

/// Routes a method body through the interception protocol.
///
/// The Rust rendition of a method decorator: written once inside a host
/// method, it governs every future call to that method. The declared method
/// name is normalized into an operation name (leading underscores stripped),
/// so a private method is hooked under its public-facing name.
///
/// The first form takes a bracketed list of prepared `serde_json::Value`
/// arguments; the second takes an already-built
/// [`CallArgs`](interpose_core::CallArgs) expression.
///
/// # Example
/// ```rust,ignore
/// fn _compute(&self, x: i64) -> InterceptResult<Output> {
///     intercepted!(self, "_compute", [json!(x)], |host: &Self, args| {
///         let x = args.get_i64(0).unwrap_or_default();
///         Ok(Output::scalar(json!(x * 2)))
///     })
/// }
/// ```
#[macro_export]
macro_rules! intercepted {
    ($host:expr, $op:expr, [$($arg:expr),* $(,)?], $base:expr) => {
        $crate::hooks::dispatcher::dispatch(
            $host,
            &$crate::prelude::OpName::new($op),
            $crate::prelude::CallArgs::from_values(vec![$($arg),*]),
            $base,
        )
    };
    ($host:expr, $op:expr, $args:expr, $base:expr) => {
        $crate::hooks::dispatcher::dispatch(
            $host,
            &$crate::prelude::OpName::new($op),
            $args,
            $base,
        )
    };
}
