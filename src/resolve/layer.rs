//! Typed view of one theme layer (`theme` or `theme.extend`) as authored.

use crate::domain::{AnimationMap, ColorMap, ColorValue, FontFamilyMap, KeyframesMap};
use crate::error::{ConfigError, Result};
use crate::validate::{is_valid_color, is_valid_keyframe_selector};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Recognized categories present in a layer, validated. Keys the resolver
/// does not interpret are kept verbatim in `rest`.
#[derive(Debug, Default)]
pub struct ThemeLayer {
    pub colors: Option<ColorMap>,
    pub font_family: Option<FontFamilyMap>,
    pub user_select: Option<Vec<String>>,
    pub keyframes: Option<KeyframesMap>,
    pub animation: Option<AnimationMap>,
    pub rest: BTreeMap<String, Value>,
}

impl ThemeLayer {
    /// Parse the layer object found at `path`. Keys listed in `skip` are
    /// neither interpreted nor kept.
    pub fn parse(map: &Map<String, Value>, path: &str, skip: &[&str]) -> Result<Self> {
        let mut layer = ThemeLayer::default();
        for (key, value) in map {
            if skip.contains(&key.as_str()) {
                continue;
            }
            let at = format!("{}.{}", path, key);
            match key.as_str() {
                "colors" => {
                    let colors: ColorMap = typed(value, &at, "a map of color names to color values")?;
                    validate_colors(&colors)?;
                    layer.colors = Some(colors);
                }
                "fontFamily" => {
                    layer.font_family =
                        Some(typed(value, &at, "a map of names to font family lists")?);
                }
                "userSelect" => {
                    layer.user_select = Some(typed(value, &at, "a list of strings")?);
                }
                "keyframes" => {
                    let keyframes: KeyframesMap =
                        typed(value, &at, "a map of animation names to keyframe blocks")?;
                    validate_keyframes(&keyframes)?;
                    layer.keyframes = Some(keyframes);
                }
                "animation" => {
                    layer.animation =
                        Some(typed(value, &at, "a map of animation names to shorthand strings")?);
                }
                _ => {
                    layer.rest.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(layer)
    }
}

fn typed<T: DeserializeOwned>(value: &Value, path: &str, expected: &str) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|_| ConfigError::shape(path, expected))
}

fn validate_colors(colors: &ColorMap) -> Result<()> {
    for (name, value) in colors {
        match value {
            ColorValue::Single(v) => check_color(name, v)?,
            ColorValue::Shades(shades) => {
                for (shade, v) in shades {
                    check_color(&format!("{}.{}", name, shade), v)?;
                }
            }
        }
    }
    Ok(())
}

fn check_color(key: &str, value: &str) -> Result<()> {
    if is_valid_color(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidColorValue { key: key.to_string(), value: value.to_string() })
    }
}

fn validate_keyframes(keyframes: &KeyframesMap) -> Result<()> {
    for (animation, rule) in keyframes {
        for selector in rule.keys() {
            if !is_valid_keyframe_selector(selector) {
                return Err(ConfigError::InvalidKeyframeSelector {
                    animation: animation.clone(),
                    selector: selector.clone(),
                });
            }
        }
    }
    Ok(())
}
