//! Settings file loading
//!
//! Each supported format is a `SettingsSource`; the source is picked from the
//! file extension. All of them produce the same untyped raw object.

use super::js_module::{parse_module, ModuleDialect};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file names probed in a project root, in order.
pub const CONFIG_CANDIDATES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
    "tailwind.config.cts",
    "tailwind.config.mts",
    "tailwind.config.json",
    "tailwind.config.toml",
    "tailwind.config.yaml",
    "tailwind.config.yml",
];

/// A reader that turns settings text into the raw object.
pub trait SettingsSource {
    fn format_name(&self) -> &'static str;
    fn parse(&self, content: &str) -> Result<Value>;
}

pub struct JsModuleSource(pub ModuleDialect);
pub struct JsonSource;
pub struct TomlSource;
pub struct YamlSource;

impl SettingsSource for JsModuleSource {
    fn format_name(&self) -> &'static str {
        match self.0 {
            ModuleDialect::JavaScript => "js",
            ModuleDialect::TypeScript => "ts",
        }
    }

    fn parse(&self, content: &str) -> Result<Value> {
        Ok(parse_module(content, self.0)?)
    }
}

impl SettingsSource for JsonSource {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, content: &str) -> Result<Value> {
        Ok(serde_json::from_str(content)?)
    }
}

impl SettingsSource for TomlSource {
    fn format_name(&self) -> &'static str {
        "toml"
    }

    fn parse(&self, content: &str) -> Result<Value> {
        Ok(toml::from_str(content)?)
    }
}

impl SettingsSource for YamlSource {
    fn format_name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, content: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(content)?)
    }
}

pub fn source_for_path(path: &Path) -> Result<Box<dyn SettingsSource>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let source: Box<dyn SettingsSource> = match ext.as_str() {
        "js" | "cjs" | "mjs" => Box::new(JsModuleSource(ModuleDialect::JavaScript)),
        "ts" | "cts" | "mts" => Box::new(JsModuleSource(ModuleDialect::TypeScript)),
        "json" => Box::new(JsonSource),
        "toml" => Box::new(TomlSource),
        "yaml" | "yml" => Box::new(YamlSource),
        other => anyhow::bail!(
            "Unsupported settings extension '.{}' for file {}",
            other,
            path.display()
        ),
    };
    Ok(source)
}

/// Read and parse a settings file into the raw object.
pub fn load_raw(path: &Path) -> Result<Value> {
    let source = source_for_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading settings file: {}", path.display()))?;
    tracing::debug!("parsing {} as {}", path.display(), source.format_name());
    source
        .parse(&content)
        .with_context(|| format!("Invalid {} settings: {}", source.format_name(), path.display()))
}

pub fn discover_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|name| project_root.join(name)).find(|path| path.exists())
}
