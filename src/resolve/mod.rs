//! Theme resolution: raw settings -> validated -> merged `Config`.

use crate::domain::{default_theme, Config, Content, Theme, TOP_LEVEL_KEYS};
use crate::error::{ConfigError, Diagnostic, Result};
use crate::validate::validate_content_globs;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub mod layer;
pub mod merge;

use layer::ThemeLayer;

/// A resolved config plus the soft findings collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: Config,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a raw settings object, logging diagnostics as warnings.
pub fn resolve(raw: &Value) -> Result<Config> {
    let resolution = resolve_with_diagnostics(raw)?;
    for diagnostic in &resolution.diagnostics {
        tracing::warn!("{}", diagnostic);
    }
    Ok(resolution.config)
}

/// Resolve a raw settings object and hand the diagnostics back to the caller.
pub fn resolve_with_diagnostics(raw: &Value) -> Result<Resolution> {
    let root = raw.as_object().ok_or_else(|| ConfigError::shape("$", "an object"))?;

    let content = read_content(root.get("content"))?;
    let theme = read_theme(root.get("theme"))?;
    let plugins = read_plugins(root.get("plugins"))?;

    let extra: BTreeMap<String, Value> = root
        .iter()
        .filter(|(key, _)| !TOP_LEVEL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if !extra.is_empty() {
        tracing::debug!("passing through top-level keys: {:?}", extra.keys().collect::<Vec<_>>());
    }

    let diagnostics =
        theme.extend.keys().map(|key| Diagnostic::UnrecognizedExtendKey(key.clone())).collect();

    Ok(Resolution { config: Config { content, theme, plugins, extra }, diagnostics })
}

fn read_content(value: Option<&Value>) -> Result<Content> {
    let Some(content) = value.and_then(Value::as_object) else {
        return Err(ConfigError::InvalidContentGlob("`content.files` is missing".to_string()));
    };
    let files = validate_content_globs(content.get("files"))?;
    let extra = content
        .iter()
        .filter(|(key, _)| key.as_str() != "files")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Ok(Content { files, extra })
}

fn read_plugins(value: Option<&Value>) -> Result<Vec<Value>> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(plugins)) => Ok(plugins.clone()),
        Some(_) => Err(ConfigError::shape("plugins", "a list")),
    }
}

fn read_theme(value: Option<&Value>) -> Result<Theme> {
    let empty = Map::new();
    let theme_map = match value {
        None => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => return Err(ConfigError::shape("theme", "an object")),
    };
    let extend_map = match theme_map.get("extend") {
        None => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => return Err(ConfigError::shape("theme.extend", "an object")),
    };

    let replacements = ThemeLayer::parse(theme_map, "theme", &["extend"])?;
    let extensions = ThemeLayer::parse(extend_map, "theme.extend", &[])?;

    let mut theme = default_theme();
    theme.extra = merge::apply_replacements(&mut theme, replacements);
    theme.extend = merge::apply_extend(&mut theme, extensions);
    Ok(theme)
}
