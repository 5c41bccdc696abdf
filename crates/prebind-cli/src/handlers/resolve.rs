//! Resolve command handler.

use std::io::Write;
use std::path::Path;

use prebind_core::{BindingDescriptor, EnvironmentOverride, Resolver};
use tracing::debug;

use super::mode_options;
use crate::error::CliResult;

/// Arguments for the resolve command.
#[derive(Debug)]
pub struct ResolveArgs<'a> {
    pub base: &'a Path,
    pub descriptor: &'a BindingDescriptor,
    pub overrides: EnvironmentOverride,
    pub verify: bool,
    pub allow_missing: bool,
}

/// Print the resolved binding path.
///
/// A miss is an error unless `allow_missing` is set, in which case nothing is
/// printed.
pub fn execute(resolver: &Resolver, args: ResolveArgs<'_>, out: &mut impl Write) -> CliResult<()> {
    let options = mode_options(args.verify, args.overrides).throw_on_missing(!args.allow_missing);

    match resolver.resolve(args.base, args.descriptor, &options)? {
        Some(path) => writeln!(out, "{}", path.display())?,
        None => debug!(binding = %args.descriptor.name, "Binding missing; nothing to print"),
    }
    Ok(())
}
