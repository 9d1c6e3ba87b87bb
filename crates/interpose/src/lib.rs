//! # interpose
//!
//! Method-interception framework. Provides:
//!
//! - The [`Plugin`] trait, the [`Host`] contract, and an ordered
//!   [`PluginRegistry`]
//! - Explicit [`HookTable`]s mapping `(operation, hook kind)` to callables
//! - The four-phase dispatch engine: override conflict check, pre-hooks,
//!   primary-or-override call, post-hooks
//! - A closure-based plugin builder and the [`intercepted!`] wrapping macro

pub mod hooks;
pub mod macros;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use hooks::definitions::{HookKind, HookTable};
pub use hooks::dispatcher::dispatch;
pub use registry::{Host, Plugin, PluginRegistry};
pub use traits::HookPlugin;
