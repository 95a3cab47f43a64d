//! One-level merges applied per theme category.
//!
//! Maps merge key-by-key: an overlay entry replaces the base entry wholesale,
//! nested values (shade families, keyframe blocks) are never merged further.

use crate::domain::Theme;
use crate::resolve::layer::ThemeLayer;
use std::collections::BTreeMap;

pub fn merge_map<V>(base: &mut BTreeMap<String, V>, overlay: BTreeMap<String, V>) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}

/// Append overlay items not already present, keeping first-seen order.
pub fn merge_sequence(base: &mut Vec<String>, overlay: Vec<String>) {
    for item in overlay {
        if !base.contains(&item) {
            base.push(item);
        }
    }
}

/// Theme-level categories replace the corresponding default outright.
pub fn apply_replacements(theme: &mut Theme, layer: ThemeLayer) -> BTreeMap<String, serde_json::Value> {
    if let Some(colors) = layer.colors {
        theme.colors = colors;
    }
    if let Some(font_family) = layer.font_family {
        theme.font_family = font_family;
    }
    if let Some(user_select) = layer.user_select {
        theme.user_select = user_select;
    }
    if let Some(keyframes) = layer.keyframes {
        theme.keyframes = keyframes;
    }
    if let Some(animation) = layer.animation {
        theme.animation = animation;
    }
    layer.rest
}

/// `theme.extend` categories merge over whatever the theme holds so far.
pub fn apply_extend(theme: &mut Theme, layer: ThemeLayer) -> BTreeMap<String, serde_json::Value> {
    if let Some(colors) = layer.colors {
        merge_map(&mut theme.colors, colors);
    }
    if let Some(font_family) = layer.font_family {
        merge_map(&mut theme.font_family, font_family);
    }
    if let Some(user_select) = layer.user_select {
        merge_sequence(&mut theme.user_select, user_select);
    }
    if let Some(keyframes) = layer.keyframes {
        merge_map(&mut theme.keyframes, keyframes);
    }
    if let Some(animation) = layer.animation {
        merge_map(&mut theme.animation, animation);
    }
    layer.rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_theme, ColorValue};

    #[test]
    fn map_overlay_replaces_and_adds() {
        let mut base: BTreeMap<String, u8> = [("a".to_string(), 1), ("b".to_string(), 2)].into();
        merge_map(&mut base, [("b".to_string(), 20), ("c".to_string(), 3)].into());
        assert_eq!(base, [("a".to_string(), 1), ("b".to_string(), 20), ("c".to_string(), 3)].into());
    }

    #[test]
    fn sequence_merge_dedups_in_order() {
        let mut base = vec!["none".to_string(), "text".to_string()];
        merge_sequence(&mut base, vec!["all".to_string(), "none".to_string(), "all".to_string()]);
        assert_eq!(base, vec!["none", "text", "all"]);
    }

    #[test]
    fn extend_replaces_whole_shade_family() {
        let mut theme = default_theme();
        let mut layer = ThemeLayer::default();
        let mut shades = BTreeMap::new();
        shades.insert("500".to_string(), "#ff0000".to_string());
        layer.colors = Some([("red".to_string(), ColorValue::Shades(shades.clone()))].into());

        apply_extend(&mut theme, layer);
        assert_eq!(theme.colors["red"], ColorValue::Shades(shades));
        assert!(theme.colors.contains_key("blue"));
    }

    #[test]
    fn replacement_drops_defaults() {
        let mut theme = default_theme();
        let layer = ThemeLayer {
            colors: Some([("ink".to_string(), ColorValue::Single("#111".to_string()))].into()),
            ..ThemeLayer::default()
        };
        apply_replacements(&mut theme, layer);
        assert_eq!(theme.colors.len(), 1);
        assert!(!theme.font_family.is_empty());
    }
}
