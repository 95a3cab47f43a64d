//! Resolve command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{resolve_target, TargetArgs};
use crate::render::{render_config, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub selection: TargetArgs,

    /// Output format for the merged config
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let settings = args.selection.settings()?;
    let target = match args.selection.config_target() {
        Some(target) => target,
        None => settings.select(&args.selection.project, args.selection.target.as_deref())?,
    };

    let resolution = resolve_target(&target)?;
    for diagnostic in &resolution.diagnostics {
        tracing::warn!("{}: {}", target.name, diagnostic);
    }
    if args.selection.strict(&settings) && !resolution.diagnostics.is_empty() {
        anyhow::bail!(
            "Target '{}' has {} diagnostic(s) and --strict is set",
            target.name,
            resolution.diagnostics.len()
        );
    }

    print!("{}", render_config(&resolution.config, args.format)?);
    Ok(())
}
