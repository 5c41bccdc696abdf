//! Verify command handler.
//!
//! Used by install scripts: exit 0 means a prebuild for the target is
//! present, exit 1 means the package has to be built from source.

use std::io::Write;
use std::path::Path;

use prebind_core::{BindingDescriptor, EnvironmentOverride, ResolveOptions, Resolver};
use tracing::info;

use crate::error::CliResult;

/// Check that a prebuild exists for the (possibly overridden) target.
///
/// Local build outputs never count. A miss fails with the full candidate list.
pub fn execute(
    resolver: &Resolver,
    base: &Path,
    descriptor: &BindingDescriptor,
    overrides: EnvironmentOverride,
    out: &mut impl Write,
) -> CliResult<()> {
    let options = ResolveOptions::verify(overrides).throw_on_missing(true);

    if let Some(path) = resolver.resolve(base, descriptor, &options)? {
        info!(binding = %descriptor.name, path = %path.display(), "Prebuild verified");
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
