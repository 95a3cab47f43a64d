//! Targets command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_settings;

#[derive(Args)]
pub struct TargetsArgs {
    /// Project root holding theme-resolve.toml or a tailwind.config.* file
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: TargetsArgs) -> Result<()> {
    let settings = load_settings(&args.project)?;
    let targets = settings.targets(&args.project)?;
    let default = settings.default_target.as_deref();

    let width = targets.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for target in &targets {
        let marker = if Some(target.name.as_str()) == default { "*" } else { " " };
        println!(
            "{} {:<width$}  {}",
            marker,
            target.name,
            target.config_path.display(),
            width = width
        );
    }
    Ok(())
}
