//! Hook kinds, hook callable types, and the per-plugin hook table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use interpose_core::result::InterceptResult;
use interpose_core::types::args::CallArgs;
use interpose_core::types::op::OpName;
use interpose_core::types::output::Output;

/// The three hook families a plugin can contribute to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// Runs before the primary call; may replace the argument tuple.
    Pre,
    /// Runs after the primary call; may replace the output envelope.
    Post,
    /// Runs in place of the base implementation. At most one provider per
    /// operation across the whole plugin sequence.
    Override,
}

impl HookKind {
    /// Returns the string name of this hook kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Override => "override",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pre-hook: observes or rewrites the argument tuple.
///
/// `Ok(Some(args))` replaces the tuple for all subsequent pre-hooks and for
/// the primary/override call; `Ok(None)` leaves it unchanged.
pub type PreHookFn<H> =
    Box<dyn Fn(&H, &CallArgs) -> InterceptResult<Option<CallArgs>> + Send + Sync>;

/// A post-hook: observes or rewrites the output envelope.
///
/// `Ok(Some(output))` replaces the envelope for all subsequent post-hooks
/// and the final result; `Ok(None)` means the hook was side-effect-only.
pub type PostHookFn<H> =
    Box<dyn Fn(&H, &Output) -> InterceptResult<Option<Output>> + Send + Sync>;

/// An override: runs in place of the base implementation.
pub type OverrideFn<H> = Box<dyn Fn(&H, &CallArgs) -> InterceptResult<Output> + Send + Sync>;

/// A plugin's explicit capability map: `(operation, hook kind)` → callable.
///
/// Populated at plugin construction. The dispatcher looks entries up here;
/// there is no probing for dynamically-named methods, and an operation with
/// no entry is simply skipped for that plugin.
pub struct HookTable<H> {
    /// Pre-hooks keyed by operation.
    pre: HashMap<OpName, PreHookFn<H>>,
    /// Post-hooks keyed by operation.
    post: HashMap<OpName, PostHookFn<H>>,
    /// Overrides keyed by operation.
    overrides: HashMap<OpName, OverrideFn<H>>,
}

impl<H> HookTable<H> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            pre: HashMap::new(),
            post: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    /// Registers a pre-hook for `op`, builder-style.
    pub fn on_pre<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &CallArgs) -> InterceptResult<Option<CallArgs>> + Send + Sync + 'static,
    {
        self.pre.insert(op.into(), Box::new(hook));
        self
    }

    /// Registers a post-hook for `op`, builder-style.
    pub fn on_post<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &Output) -> InterceptResult<Option<Output>> + Send + Sync + 'static,
    {
        self.post.insert(op.into(), Box::new(hook));
        self
    }

    /// Registers the override for `op`, builder-style.
    pub fn on_override<F>(mut self, op: impl Into<OpName>, hook: F) -> Self
    where
        F: Fn(&H, &CallArgs) -> InterceptResult<Output> + Send + Sync + 'static,
    {
        self.overrides.insert(op.into(), Box::new(hook));
        self
    }

    /// Returns the pre-hook for `op`, if any.
    pub fn pre_for(&self, op: &OpName) -> Option<&PreHookFn<H>> {
        self.pre.get(op)
    }

    /// Returns the post-hook for `op`, if any.
    pub fn post_for(&self, op: &OpName) -> Option<&PostHookFn<H>> {
        self.post.get(op)
    }

    /// Returns the override for `op`, if any.
    pub fn override_for(&self, op: &OpName) -> Option<&OverrideFn<H>> {
        self.overrides.get(op)
    }

    /// Returns whether this table provides the given hook kind for `op`.
    pub fn provides(&self, op: &OpName, kind: HookKind) -> bool {
        match kind {
            HookKind::Pre => self.pre.contains_key(op),
            HookKind::Post => self.post.contains_key(op),
            HookKind::Override => self.overrides.contains_key(op),
        }
    }

    /// Returns every operation with at least one hook registered, sorted.
    pub fn registered_ops(&self) -> Vec<&OpName> {
        let mut ops: Vec<&OpName> = self
            .pre
            .keys()
            .chain(self.post.keys())
            .chain(self.overrides.keys())
            .collect();
        ops.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ops.dedup();
        ops
    }

    /// Returns whether the table has no hooks at all.
    pub fn is_empty(&self) -> bool {
        self.pre.is_empty() && self.post.is_empty() && self.overrides.is_empty()
    }
}

impl<H> Default for HookTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for HookTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("pre", &self.pre.keys().collect::<Vec<_>>())
            .field("post", &self.post.keys().collect::<Vec<_>>())
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let table: HookTable<()> = HookTable::new()
            .on_pre("upload", |_, _| Ok(None))
            .on_post("upload", |_, _| Ok(None))
            .on_override("delete", |_, _| Ok(Output::none()));

        let upload = OpName::new("upload");
        let delete = OpName::new("delete");

        assert!(table.pre_for(&upload).is_some());
        assert!(table.post_for(&upload).is_some());
        assert!(table.override_for(&upload).is_none());
        assert!(table.override_for(&delete).is_some());
    }

    #[test]
    fn test_provides_checks_each_kind_independently() {
        let table: HookTable<()> = HookTable::new().on_pre("upload", |_, _| Ok(None));
        let upload = OpName::new("upload");

        assert!(table.provides(&upload, HookKind::Pre));
        assert!(!table.provides(&upload, HookKind::Post));
        assert!(!table.provides(&upload, HookKind::Override));
    }

    #[test]
    fn test_registration_normalizes_operation_names() {
        // A hook registered under the private spelling lands in the same
        // family as the public-facing name.
        let table: HookTable<()> = HookTable::new().on_pre("_upload", |_, _| Ok(None));
        assert!(table.pre_for(&OpName::new("upload")).is_some());
    }

    #[test]
    fn test_registered_ops_is_sorted_and_deduplicated() {
        let table: HookTable<()> = HookTable::new()
            .on_pre("upload", |_, _| Ok(None))
            .on_post("upload", |_, _| Ok(None))
            .on_pre("delete", |_, _| Ok(None));

        let ops: Vec<&str> = table.registered_ops().iter().map(|op| op.as_str()).collect();
        assert_eq!(ops, vec!["delete", "upload"]);
    }

    #[test]
    fn test_hook_kind_serialization() {
        let json = serde_json::to_string(&HookKind::Override).unwrap();
        assert_eq!(json, "\"override\"");
        assert_eq!(HookKind::Pre.as_str(), "pre");
    }
}
