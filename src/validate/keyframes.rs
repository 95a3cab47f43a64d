//! Keyframe selector validation

use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)%$").expect("valid regex"));

/// Whether `selector` is `from`, `to`, a percentage in `[0%, 100%]`, or a
/// comma-separated list of those (`"0%, 100%"`).
pub fn is_valid_keyframe_selector(selector: &str) -> bool {
    selector.split(',').all(|part| {
        let part = part.trim();
        if part.eq_ignore_ascii_case("from") || part.eq_ignore_ascii_case("to") {
            return true;
        }
        let Some(caps) = PERCENTAGE.captures(part) else {
            return false;
        };
        caps[1].parse::<f64>().map(|pct| (0.0..=100.0).contains(&pct)).unwrap_or(false)
    })
}
