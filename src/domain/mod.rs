//! Resolved configuration model
//!
//! Every record serializes back to the authored key names (`fontFamily`,
//! `userSelect`, ...) so a resolved config can be fed to the resolver again.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod defaults;

pub use defaults::default_theme;

/// Top-level keys the resolver interprets. Everything else is passed through.
pub const TOP_LEVEL_KEYS: &[&str] = &["content", "theme", "plugins"];

/// Fully merged, read-only configuration handed to the style generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub content: Content,
    pub theme: Theme,
    pub plugins: Vec<Value>,
    /// Unknown top-level keys, verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Config {
    /// Re-express the resolved config in the raw, as-authored shape.
    pub fn to_raw(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Source files the generator scans for class usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub files: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A color entry: a single value or a family of shades (`red.500`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Shades(BTreeMap<String, String>),
}

/// A font family entry: one family string or an ordered fallback stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontStack {
    Single(String),
    Stack(Vec<String>),
}

/// A CSS declaration value inside a keyframe block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(serde_json::Number),
}

pub type ColorMap = BTreeMap<String, ColorValue>;
pub type FontFamilyMap = BTreeMap<String, FontStack>;
/// property -> value
pub type Declarations = BTreeMap<String, StyleValue>;
/// selector (`from`, `50%`, `0%, 100%`) -> declarations
pub type KeyframeRule = BTreeMap<String, Declarations>;
pub type KeyframesMap = BTreeMap<String, KeyframeRule>;
/// animation name -> CSS `animation` shorthand
pub type AnimationMap = BTreeMap<String, String>;

/// Resolved theme: defaults, then theme-level replacements, then `extend`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ColorMap,
    pub font_family: FontFamilyMap,
    pub user_select: Vec<String>,
    pub keyframes: KeyframesMap,
    pub animation: AnimationMap,
    /// `theme.extend` categories the resolver does not merge, verbatim.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extend: BTreeMap<String, Value>,
    /// Other theme-level keys, verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn theme_serializes_authored_key_names() {
        let mut theme = default_theme();
        theme.extend.insert("fontFamaily".to_string(), json!({}));
        let value = serde_json::to_value(&theme).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(obj.contains_key("fontFamily"));
        assert!(obj.contains_key("userSelect"));
        assert_eq!(obj["extend"], json!({ "fontFamaily": {} }));
    }

    #[test]
    fn empty_extend_is_omitted() {
        let value = serde_json::to_value(default_theme()).expect("serialize");
        assert!(value.get("extend").is_none());
    }

    #[test]
    fn color_value_accepts_single_and_shades() {
        let single: ColorValue = serde_json::from_value(json!("#fff")).expect("single");
        assert_eq!(single, ColorValue::Single("#fff".to_string()));
        let shades: ColorValue =
            serde_json::from_value(json!({ "100": "#fee2e2", "500": "#ef4444" })).expect("shades");
        assert!(matches!(shades, ColorValue::Shades(ref s) if s.len() == 2));
    }

    #[test]
    fn to_raw_is_the_authored_shape() {
        let config = Config {
            content: Content { files: vec!["*.html".to_string()], extra: BTreeMap::new() },
            theme: default_theme(),
            plugins: vec![json!("typography")],
            extra: BTreeMap::from([("darkMode".to_string(), json!("class"))]),
        };
        let raw = config.to_raw().expect("raw");
        assert_eq!(raw["content"], json!({ "files": ["*.html"] }));
        assert_eq!(raw["plugins"], json!(["typography"]));
        assert_eq!(raw["darkMode"], json!("class"));
        assert_eq!(raw["theme"]["userSelect"], json!(config.theme.user_select));
        assert!(!raw.is_null());
    }
}
