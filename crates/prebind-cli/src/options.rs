//! Binding options and target overrides from flags, files and environment.
//!
//! This is the only place the process environment feeds into resolution:
//! the `npm_config_*` variables npm exports for `--arch`, `--platform` and
//! `--runtime` become an `EnvironmentOverride`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use prebind_core::{BindingDescriptor, EnvironmentOverride};

use crate::error::{CliError, CliResult};

/// Environment variable overriding the target architecture.
pub const ARCH_ENV: &str = "npm_config_arch";
/// Environment variable overriding the target platform.
pub const PLATFORM_ENV: &str = "npm_config_platform";
/// Environment variable overriding the target runtime.
pub const RUNTIME_ENV: &str = "npm_config_runtime";

/// Which binding to look for.
#[derive(Args, Debug, Clone, Default)]
pub struct BindingArgs {
    /// JSON binding options file (`{"name": ..., "napi_versions": [...]}`)
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Binding name (overrides the options file)
    #[arg(long)]
    pub name: Option<String>,

    /// Node-API version, most preferred first (repeatable; overrides the options file)
    #[arg(long = "napi-version", value_name = "N")]
    pub napi_versions: Vec<u32>,
}

impl BindingArgs {
    /// Merge the options file (if any) with the flags.
    pub fn descriptor(&self) -> CliResult<BindingDescriptor> {
        let mut descriptor = match &self.options_file {
            Some(path) => {
                read_options_file(path).map_err(|e| CliError::Config(format!("{e:#}")))?
            }
            None => BindingDescriptor::legacy(String::new()),
        };

        if let Some(name) = &self.name {
            descriptor.name.clone_from(name);
        }
        if !self.napi_versions.is_empty() {
            descriptor.napi_versions = Some(self.napi_versions.clone());
        }

        if descriptor.name.is_empty() {
            return Err(CliError::Arguments(
                "a binding name is required (--name or --options)".to_string(),
            ));
        }

        Ok(descriptor)
    }
}

/// Read a binding options file.
pub fn read_options_file(path: &Path) -> anyhow::Result<BindingDescriptor> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse options file {}", path.display()))
}

/// Target overrides; only applied in verify mode.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Target architecture to verify for
    #[arg(long, env = ARCH_ENV)]
    pub arch: Option<String>,

    /// Target platform to verify for
    #[arg(long, env = PLATFORM_ENV)]
    pub platform: Option<String>,

    /// Target runtime (ignored for Node-API bindings, which share one prebuild across runtimes)
    #[arg(long, env = RUNTIME_ENV)]
    pub runtime: Option<String>,
}

impl From<&OverrideArgs> for EnvironmentOverride {
    fn from(args: &OverrideArgs) -> Self {
        Self {
            arch: args.arch.clone(),
            platform: args.platform.clone(),
            runtime: args.runtime.clone(),
        }
    }
}
