//! Check command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{resolve_target, TargetArgs};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: TargetArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let settings = args.selection.settings()?;
    let strict = args.selection.strict(&settings);

    // Without an explicit selection every target is checked.
    let targets = match (args.selection.config_target(), args.selection.target.as_deref()) {
        (Some(target), _) => vec![target],
        (None, Some(name)) => vec![settings.select(&args.selection.project, Some(name))?],
        (None, None) => settings.targets(&args.selection.project)?,
    };

    let mut failed = 0usize;
    for target in &targets {
        match resolve_target(target) {
            Ok(resolution) => {
                let rejected = strict && !resolution.diagnostics.is_empty();
                let status = if rejected { "FAIL" } else { "ok" };
                println!("{:<4} {} ({})", status, target.name, target.config_path.display());
                for diagnostic in &resolution.diagnostics {
                    println!("     warning: {}", diagnostic);
                }
                if rejected {
                    failed += 1;
                }
            }
            Err(err) => {
                println!("FAIL {} ({})", target.name, target.config_path.display());
                println!("     error: {:#}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} target(s) failed", failed, targets.len());
    }
    Ok(())
}
