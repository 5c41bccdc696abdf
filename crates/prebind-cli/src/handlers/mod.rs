//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(resolver: &Resolver, ..., out: &mut impl Write) -> CliResult<()>`
//! - Thin wrappers that:
//!   1. Turn parsed flags into `ResolveOptions`
//!   2. Call the resolver
//!   3. Write plain, script-friendly output to `out`
//!
//! Logging goes to stderr through `tracing`; `out` carries only results.

pub mod candidates;
pub mod identity;
pub mod resolve;
pub mod verify;

use prebind_core::{EnvironmentOverride, ResolveOptions};

/// Options for commands that switch between production and verify mode.
pub(crate) fn mode_options(verify: bool, overrides: EnvironmentOverride) -> ResolveOptions {
    if verify {
        ResolveOptions::verify(overrides)
    } else {
        ResolveOptions::production()
    }
}
