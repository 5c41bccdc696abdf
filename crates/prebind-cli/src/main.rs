//! CLI entry point - the composition root.
//!
//! This is the only place that touches process-wide state: `.env` loading,
//! the tracing subscriber, and the exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prebind_cli::handlers::{self, resolve::ResolveArgs};
use prebind_cli::{Cli, CliResult, Commands};
use prebind_core::{EnvironmentOverride, Resolver};

fn main() -> ExitCode {
    // Load environment variables before clap reads npm_config_* fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Log to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(command: Commands) -> CliResult<()> {
    let resolver = Resolver::system();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Resolve {
            base,
            binding,
            overrides,
            verify,
            allow_missing,
        } => {
            let descriptor = binding.descriptor()?;
            let args = ResolveArgs {
                base: &base,
                descriptor: &descriptor,
                overrides: EnvironmentOverride::from(&overrides),
                verify,
                allow_missing,
            };
            handlers::resolve::execute(&resolver, args, &mut out)?;
        }
        Commands::Verify {
            base,
            binding,
            overrides,
        } => {
            let descriptor = binding.descriptor()?;
            handlers::verify::execute(
                &resolver,
                &base,
                &descriptor,
                EnvironmentOverride::from(&overrides),
                &mut out,
            )?;
        }
        Commands::Candidates {
            base,
            binding,
            overrides,
            verify,
        } => {
            let descriptor = binding.descriptor()?;
            handlers::candidates::execute(
                &resolver,
                &base,
                &descriptor,
                EnvironmentOverride::from(&overrides),
                verify,
                &mut out,
            )?;
        }
        Commands::Identity {
            binding,
            overrides,
            verify,
        } => {
            let descriptor = binding.descriptor()?;
            handlers::identity::execute(
                &resolver,
                &descriptor,
                EnvironmentOverride::from(&overrides),
                verify,
                &mut out,
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
