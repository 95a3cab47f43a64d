//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_raw, load_settings, ProjectSettings, Target};
use crate::resolve::{resolve_with_diagnostics, Resolution};

/// Target selection flags shared by `resolve` and `check`.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Project root holding theme-resolve.toml or a tailwind.config.* file
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    /// Build target declared in theme-resolve.toml
    #[arg(short, long, value_name = "NAME", conflicts_with = "config")]
    pub target: Option<String>,

    /// Settings file to resolve directly, bypassing target selection
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail when resolution reports diagnostics
    #[arg(long)]
    pub strict: bool,
}

impl TargetArgs {
    pub fn settings(&self) -> Result<ProjectSettings> {
        load_settings(&self.project)
    }

    /// The explicit `--config` file as an ad-hoc target.
    pub fn config_target(&self) -> Option<Target> {
        self.config.as_ref().map(|path| Target {
            name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("config")
                .to_string(),
            config_path: path.clone(),
        })
    }

    pub fn strict(&self, settings: &ProjectSettings) -> bool {
        self.strict || settings.strict
    }
}

pub fn resolve_target(target: &Target) -> Result<Resolution> {
    let raw = load_raw(&target.config_path)?;
    let resolution = resolve_with_diagnostics(&raw).with_context(|| {
        format!("Failed resolving target '{}' ({})", target.name, target.config_path.display())
    })?;
    tracing::debug!(
        target_name = %target.name,
        diagnostics = resolution.diagnostics.len(),
        "resolved"
    );
    Ok(resolution)
}
