//! The interception engine — threads one call through its hook phases.
//!
//! Each intercepted call runs a fixed, strictly linear sequence:
//!
//! 1. Override resolution: at most one plugin in the sequence may claim the
//!    override for an operation; a second claimant aborts the call before
//!    anything else runs.
//! 2. Pre-hooks: every plugin's pre-hook in sequence order, each free to
//!    replace the argument tuple.
//! 3. Primary call: the claimed override, or else the base implementation.
//! 4. Post-hooks: every plugin's post-hook in sequence order, each free to
//!    replace the output envelope.
//!
//! There is no retry, no loop-back, and no state kept between calls. The
//! plugin sequence is iterated but never mutated here.

use tracing::debug;

use interpose_core::error::InterceptError;
use interpose_core::result::InterceptResult;
use interpose_core::types::args::CallArgs;
use interpose_core::types::op::OpName;
use interpose_core::types::output::Output;

use crate::hooks::definitions::OverrideFn;
use crate::registry::Host;

/// Runs one intercepted call through the four-phase protocol.
///
/// `base` is the operation's own implementation; it runs unless a plugin in
/// the host's sequence overrides it. With an empty plugin sequence the call
/// goes straight to `base` with the original arguments, observably the same
/// as running every phase with zero applicable hooks.
///
/// # Errors
///
/// Returns [`InterceptError::OverrideConflict`] when a second plugin
/// provides an override for `op`; the conflict is detected before any hook
/// or side effect runs. Errors returned by pre-hooks, the override, the
/// base implementation, or post-hooks propagate unchanged.
pub fn dispatch<H, F>(host: &H, op: &OpName, args: CallArgs, base: F) -> InterceptResult<Output>
where
    H: Host,
    F: FnOnce(&H, &CallArgs) -> InterceptResult<Output>,
{
    let plugins = host.plugins();

    // Fast path: nothing to resolve against.
    if plugins.is_empty() {
        return base(host, &args);
    }

    debug!(op = %op, plugin_count = plugins.len(), "dispatching intercepted call");

    // Phase 1: override resolution. A second claimant is a configuration
    // error and must abort before any hook runs.
    let mut claimed: Option<(&str, &OverrideFn<H>)> = None;
    for plugin in plugins {
        if let Some(hook) = plugin.hooks().override_for(op) {
            match claimed {
                None => claimed = Some((plugin.name(), hook)),
                Some((first, _)) => {
                    return Err(InterceptError::override_conflict(
                        op.clone(),
                        first,
                        plugin.name(),
                    ));
                }
            }
        }
    }

    // Phase 2: pre-hooks run over the full sequence even when an override
    // was claimed; they rewrite the arguments the override will consume.
    let mut args = args;
    for plugin in plugins {
        if let Some(hook) = plugin.hooks().pre_for(op) {
            if let Some(updated) = hook(host, &args)? {
                debug!(op = %op, plugin = %plugin.name(), "pre-hook replaced arguments");
                args = updated;
            }
        }
    }

    // Phase 3: primary call.
    let mut output = match claimed {
        Some((name, hook)) => {
            debug!(op = %op, plugin = %name, "override replaces base implementation");
            hook(host, &args)?
        }
        None => base(host, &args)?,
    };

    // Phase 4: post-hooks. `None` leaves the current output untouched.
    for plugin in plugins {
        if let Some(hook) = plugin.hooks().post_for(op) {
            if let Some(replaced) = hook(host, &output)? {
                debug!(op = %op, plugin = %plugin.name(), "post-hook replaced output");
                output = replaced;
            }
        }
    }

    Ok(output)
}
