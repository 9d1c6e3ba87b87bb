//! Prelude for convenient imports.

pub use interpose_core::error::InterceptError;
pub use interpose_core::result::InterceptResult;
pub use interpose_core::types::args::CallArgs;
pub use interpose_core::types::op::OpName;
pub use interpose_core::types::output::Output;

pub use crate::hooks::definitions::{HookKind, HookTable, OverrideFn, PostHookFn, PreHookFn};
pub use crate::hooks::dispatcher::dispatch;
pub use crate::registry::{Host, Plugin, PluginRegistry};
pub use crate::traits::HookPlugin;

pub use crate::intercepted;
