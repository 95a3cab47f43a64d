//! Output rendering for resolved configs

use crate::domain::Config;
use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

pub fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed rendering config as JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(config).context("Failed rendering config as YAML")?,
        // TOML has no null; passthrough values holding one cannot be rendered.
        OutputFormat::Toml => toml::to_string_pretty(config).context("Failed rendering config as TOML")?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
