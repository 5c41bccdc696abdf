//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

use crate::options::{BindingArgs, OverrideArgs};

/// Available commands.
///
/// Every command takes the binding to look for; commands that can target a
/// foreign platform also take override flags, which fall back to the
/// `npm_config_*` environment variables.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path the binding would be loaded from
    Resolve {
        /// Package directory containing `build/` and `prebuilds/`
        base: PathBuf,
        #[command(flatten)]
        binding: BindingArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Check availability for the target instead of the running process
        #[arg(long)]
        verify: bool,
        /// Exit successfully with no output when nothing is found
        #[arg(long)]
        allow_missing: bool,
    },

    /// Check that a prebuild exists for the target (exit 1 when missing)
    Verify {
        /// Package directory containing `prebuilds/`
        base: PathBuf,
        #[command(flatten)]
        binding: BindingArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// List candidate paths in probe order
    Candidates {
        /// Package directory containing `build/` and `prebuilds/`
        base: PathBuf,
        #[command(flatten)]
        binding: BindingArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Use verify-mode candidates (overrides applied, no local builds)
        #[arg(long)]
        verify: bool,
    },

    /// Show the environment identity prebuild names are formatted for
    Identity {
        #[command(flatten)]
        binding: BindingArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Apply target overrides
        #[arg(long)]
        verify: bool,
    },
}
