//! # interpose-core
//!
//! Core crate for Interpose. Contains the unified error system, the result
//! alias, and the value types that flow through an intercepted call: logical
//! operation names, positional argument tuples, and the uniform output
//! envelope.
//!
//! This crate has **no** internal dependencies on other Interpose crates.

pub mod error;
pub mod result;
pub mod types;

pub use error::InterceptError;
pub use result::InterceptResult;
pub use types::args::CallArgs;
pub use types::op::OpName;
pub use types::output::Output;
