//! Identity command handler.
//!
//! Displays the environment identity in `key = value` format, for debugging
//! why a prebuild does or does not match.

use std::io::Write;

use prebind_core::{BindingDescriptor, EnvironmentOverride, Resolver};

use super::mode_options;
use crate::error::CliResult;

/// Print the identity prebuild names are formatted for.
pub fn execute(
    resolver: &Resolver,
    descriptor: &BindingDescriptor,
    overrides: EnvironmentOverride,
    verify: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let identity = resolver.identity(descriptor, &mode_options(verify, overrides))?;
    writeln!(out, "{identity}")?;
    Ok(())
}
