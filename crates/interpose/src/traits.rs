//! Closure-assembled plugins for quick hook authoring.

use std::fmt;

use interpose_core::result::InterceptResult;
use interpose_core::types::args::CallArgs;
use interpose_core::types::op::OpName;
use interpose_core::types::output::Output;

use crate::hooks::definitions::HookTable;
use crate::registry::Plugin;

/// A plugin assembled from closures, for hook authoring without a dedicated
/// type.
///
/// # Example
/// ```rust,ignore
/// let audit = HookPlugin::new("audit")
///     .on_pre("upload", |_host: &Server, args| {
///         println!("uploading {:?}", args.get_str(0));
///         Ok(None)
///     })
///     .on_post("upload", |_host, output| Ok(Some(output.clone())));
/// ```
pub struct HookPlugin<H> {
    /// Name used in diagnostics.
    name: String,
    /// Capability table.
    hooks: HookTable<H>,
}

impl<H> HookPlugin<H> {
    /// Creates a plugin with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: HookTable::new(),
        }
    }

    /// Adds a pre-hook for `op`.
    pub fn on_pre<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &CallArgs) -> InterceptResult<Option<CallArgs>> + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_pre(op, hook);
        self
    }

    /// Adds a post-hook for `op`.
    pub fn on_post<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &Output) -> InterceptResult<Option<Output>> + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_post(op, hook);
        self
    }

    /// Sets the override for `op`.
    pub fn on_override<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &CallArgs) -> InterceptResult<Output> + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_override(op, hook);
        self
    }
}

impl<H> Plugin<H> for HookPlugin<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &HookTable<H> {
        &self.hooks
    }
}

impl<H> fmt::Debug for HookPlugin<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPlugin")
            .field("name", &self.name)
            .field("hooks", &self.hooks)
            .finish()
    }
}
