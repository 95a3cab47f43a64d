//! CSS color syntax checks

use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex")
});

// Arguments are not parsed; `rgb(var(--accent) / <alpha-value>)` is common in
// authored themes.
static FUNCTIONAL_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:rgba?|hsla?|hwb|lab|lch|oklab|oklch)\(\s*\S.*\)$").expect("valid regex"));

static CSS_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^var\(\s*--[A-Za-z0-9_-]+\s*(?:,.*)?\)$").expect("valid regex"));

const KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit", "initial", "unset", "revert"];

const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Whether `value` is a hex color, a named CSS color, a color keyword, a
/// functional color notation or a `var(--name)` reference.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value.starts_with('#') {
        return HEX_COLOR.is_match(value);
    }

    let lower = value.to_ascii_lowercase();
    KEYWORDS.contains(&lower.as_str())
        || NAMED_COLORS.binary_search(&lower.as_str()).is_ok()
        || FUNCTIONAL_COLOR.is_match(value)
        || CSS_VARIABLE.is_match(value)
}
