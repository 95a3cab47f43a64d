//! Built-in default theme that `theme.extend` is merged over.

use super::{
    AnimationMap, ColorMap, ColorValue, Declarations, FontFamilyMap, FontStack, KeyframeRule,
    KeyframesMap, StyleValue, Theme,
};
use std::collections::BTreeMap;

const GRAY: &[(&str, &str)] = &[
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

const RED: &[(&str, &str)] = &[
    ("50", "#fef2f2"),
    ("100", "#fee2e2"),
    ("200", "#fecaca"),
    ("300", "#fca5a5"),
    ("400", "#f87171"),
    ("500", "#ef4444"),
    ("600", "#dc2626"),
    ("700", "#b91c1c"),
    ("800", "#991b1b"),
    ("900", "#7f1d1d"),
    ("950", "#450a0a"),
];

const GREEN: &[(&str, &str)] = &[
    ("50", "#f0fdf4"),
    ("100", "#dcfce7"),
    ("200", "#bbf7d0"),
    ("300", "#86efac"),
    ("400", "#4ade80"),
    ("500", "#22c55e"),
    ("600", "#16a34a"),
    ("700", "#15803d"),
    ("800", "#166534"),
    ("900", "#14532d"),
    ("950", "#052e16"),
];

const BLUE: &[(&str, &str)] = &[
    ("50", "#eff6ff"),
    ("100", "#dbeafe"),
    ("200", "#bfdbfe"),
    ("300", "#93c5fd"),
    ("400", "#60a5fa"),
    ("500", "#3b82f6"),
    ("600", "#2563eb"),
    ("700", "#1d4ed8"),
    ("800", "#1e40af"),
    ("900", "#1e3a8a"),
    ("950", "#172554"),
];

pub fn default_theme() -> Theme {
    Theme {
        colors: default_colors(),
        font_family: default_font_family(),
        user_select: default_user_select(),
        keyframes: default_keyframes(),
        animation: default_animation(),
        extend: BTreeMap::new(),
        extra: BTreeMap::new(),
    }
}

fn single(value: &str) -> ColorValue {
    ColorValue::Single(value.to_string())
}

fn shades(table: &[(&str, &str)]) -> ColorValue {
    ColorValue::Shades(table.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
}

pub fn default_colors() -> ColorMap {
    let mut colors = ColorMap::new();
    colors.insert("inherit".to_string(), single("inherit"));
    colors.insert("current".to_string(), single("currentColor"));
    colors.insert("transparent".to_string(), single("transparent"));
    colors.insert("black".to_string(), single("#000"));
    colors.insert("white".to_string(), single("#fff"));
    colors.insert("gray".to_string(), shades(GRAY));
    colors.insert("red".to_string(), shades(RED));
    colors.insert("green".to_string(), shades(GREEN));
    colors.insert("blue".to_string(), shades(BLUE));
    colors
}

fn stack(families: &[&str]) -> FontStack {
    FontStack::Stack(families.iter().map(|f| f.to_string()).collect())
}

pub fn default_font_family() -> FontFamilyMap {
    let mut fonts = FontFamilyMap::new();
    fonts.insert(
        "sans".to_string(),
        stack(&[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "Apple Color Emoji",
            "Segoe UI Emoji",
            "Segoe UI Symbol",
            "Noto Color Emoji",
        ]),
    );
    fonts.insert(
        "serif".to_string(),
        stack(&["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"]),
    );
    fonts.insert(
        "mono".to_string(),
        stack(&[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ]),
    );
    fonts
}

pub fn default_user_select() -> Vec<String> {
    ["none", "text", "all", "auto"].iter().map(|s| s.to_string()).collect()
}

fn declarations(pairs: &[(&str, &str)]) -> Declarations {
    pairs.iter().map(|(k, v)| (k.to_string(), StyleValue::Text(v.to_string()))).collect()
}

fn rule(blocks: &[(&str, Declarations)]) -> KeyframeRule {
    blocks.iter().map(|(sel, decls)| (sel.to_string(), decls.clone())).collect()
}

pub fn default_keyframes() -> KeyframesMap {
    let mut keyframes = KeyframesMap::new();
    keyframes.insert("spin".to_string(), rule(&[("to", declarations(&[("transform", "rotate(360deg)")]))]));
    keyframes.insert(
        "ping".to_string(),
        rule(&[("75%, 100%", declarations(&[("transform", "scale(2)"), ("opacity", "0")]))]),
    );
    keyframes.insert("pulse".to_string(), rule(&[("50%", declarations(&[("opacity", ".5")]))]));
    keyframes.insert(
        "bounce".to_string(),
        rule(&[
            (
                "0%, 100%",
                declarations(&[
                    ("transform", "translateY(-25%)"),
                    ("animationTimingFunction", "cubic-bezier(0.8,0,1,1)"),
                ]),
            ),
            (
                "50%",
                declarations(&[
                    ("transform", "none"),
                    ("animationTimingFunction", "cubic-bezier(0,0,0.2,1)"),
                ]),
            ),
        ]),
    );
    keyframes
}

pub fn default_animation() -> AnimationMap {
    [
        ("none", "none"),
        ("spin", "spin 1s linear infinite"),
        ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
        ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
        ("bounce", "bounce 1s infinite"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
