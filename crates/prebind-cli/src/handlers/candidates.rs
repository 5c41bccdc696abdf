//! Candidates command handler.

use std::io::Write;
use std::path::Path;

use prebind_core::{BindingDescriptor, EnvironmentOverride, Resolver};

use super::mode_options;
use crate::error::CliResult;

/// Print every candidate path in probe order, one per line.
pub fn execute(
    resolver: &Resolver,
    base: &Path,
    descriptor: &BindingDescriptor,
    overrides: EnvironmentOverride,
    verify: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let options = mode_options(verify, overrides);
    for candidate in resolver.candidates(base, descriptor, &options)? {
        writeln!(out, "{}", candidate.display())?;
    }
    Ok(())
}
