//! # plugin-trace
//!
//! Bundled observability plugin for Interpose. Watches a configured set of
//! operations and logs every intercepted call (argument count on the way in,
//! output arity on the way out) without ever changing it: both of its hooks
//! are side-effect-only and always return `Ok(None)`.

use std::fmt;

use tracing::info;

use interpose::hooks::definitions::HookTable;
use interpose::registry::Plugin;
use interpose_core::types::args::CallArgs;
use interpose_core::types::op::OpName;
use interpose_core::types::output::Output;

/// Side-effect-only plugin that logs intercepted calls for chosen
/// operations.
///
/// One instance hooks every watched operation with both a pre- and a
/// post-hook.
pub struct TracePlugin<H> {
    /// Name used in diagnostics.
    name: String,
    /// Capability table with one pre- and one post-hook per watched op.
    hooks: HookTable<H>,
}

impl<H: 'static> TracePlugin<H> {
    /// Creates a trace plugin watching the given operations.
    ///
    /// Operation names are normalized the same way method names are, so
    /// watching `"_compute"` and `"compute"` is equivalent.
    pub fn watching<I, S>(ops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hooks = HookTable::new();
        for op in ops {
            let op = OpName::new(op.as_ref());

            let entered = op.clone();
            hooks = hooks.on_pre(op.clone(), move |_host: &H, args: &CallArgs| {
                info!(op = %entered, args = args.len(), "intercepted call entered");
                Ok(None)
            });

            let completed = op.clone();
            hooks = hooks.on_post(op, move |_host: &H, output: &Output| {
                info!(op = %completed, arity = output.arity(), "intercepted call completed");
                Ok(None)
            });
        }

        Self {
            name: "trace".to_string(),
            hooks,
        }
    }

    /// Replaces the default plugin name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<H> Plugin<H> for TracePlugin<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &HookTable<H> {
        &self.hooks
    }
}

impl<H> fmt::Debug for TracePlugin<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracePlugin")
            .field("name", &self.name)
            .field("hooks", &self.hooks)
            .finish()
    }
}
