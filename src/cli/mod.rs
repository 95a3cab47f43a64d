//! Command-line interface for theme-resolve
//!
//! Provides `resolve`, `check`, `targets` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod check;
mod completions;
mod resolve;
mod targets;
mod utils;

/// Load, validate and merge utility-CSS theme settings
#[derive(Parser)]
#[command(name = "theme-resolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one build target and print the merged config
    Resolve(resolve::ResolveArgs),

    /// Validate build targets without printing the merged config
    Check(check::CheckArgs),

    /// List the build targets of a project
    Targets(targets::TargetsArgs),

    /// Print a shell completion script
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Targets(args) => targets::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Diagnostics go to stderr so stdout carries only the rendered config.
fn init_logging(verbose: bool) {
    let filter = log_filter(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// A non-empty `RUST_LOG` is used as given; otherwise warnings, or everything
/// down to debug with `--verbose`.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    EnvFilter::builder().with_default_directive(level.into()).parse_lossy(rust_log.unwrap_or(""))
}
