//! Content glob validation

use crate::error::{ConfigError, Result};
use globset::{Glob, GlobSetBuilder};
use serde_json::Value;

/// Validate `content.files` and return the patterns in authored order.
///
/// A leading `!` marks a negated pattern; the rest must still compile.
pub fn validate_content_globs(files: Option<&Value>) -> Result<Vec<String>> {
    let Some(files) = files else {
        return Err(ConfigError::InvalidContentGlob("`content.files` is missing".to_string()));
    };
    let Some(entries) = files.as_array() else {
        return Err(ConfigError::InvalidContentGlob(
            "`content.files` must be a list of glob patterns".to_string(),
        ));
    };
    if entries.is_empty() {
        return Err(ConfigError::InvalidContentGlob("`content.files` is empty".to_string()));
    }

    let mut builder = GlobSetBuilder::new();
    let mut patterns = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(pattern) = entry.as_str() else {
            return Err(ConfigError::InvalidContentGlob(format!(
                "`content.files[{}]` is not a string: {}",
                index, entry
            )));
        };
        let body = pattern.strip_prefix('!').unwrap_or(pattern);
        if body.trim().is_empty() {
            return Err(ConfigError::InvalidContentGlob(format!(
                "`content.files[{}]` is an empty pattern",
                index
            )));
        }
        let glob = Glob::new(body).map_err(|e| {
            ConfigError::InvalidContentGlob(format!("`content.files[{}]` ({}): {}", index, pattern, e))
        })?;
        builder.add(glob);
        patterns.push(pattern.to_string());
    }
    builder
        .build()
        .map_err(|e| ConfigError::InvalidContentGlob(format!("`content.files`: {}", e)))?;

    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_authored_patterns() {
        let files = json!(["*.html", "./src/**/*.rs", "!./src/generated/**"]);
        let patterns = validate_content_globs(Some(&files)).expect("valid");
        assert_eq!(patterns, vec!["*.html", "./src/**/*.rs", "!./src/generated/**"]);
    }

    #[test]
    fn missing_files_is_rejected() {
        assert!(matches!(validate_content_globs(None), Err(ConfigError::InvalidContentGlob(_))));
    }

    #[test]
    fn empty_list_is_rejected() {
        let files = json!([]);
        assert!(matches!(
            validate_content_globs(Some(&files)),
            Err(ConfigError::InvalidContentGlob(_))
        ));
    }

    #[test]
    fn non_string_entry_is_rejected() {
        let files = json!(["*.html", 42]);
        let err = validate_content_globs(Some(&files)).unwrap_err();
        assert!(err.to_string().contains("content.files[1]"));
    }

    #[test]
    fn blank_pattern_is_rejected() {
        for files in [json!([""]), json!(["  "]), json!(["!"])] {
            assert!(validate_content_globs(Some(&files)).is_err(), "{}", files);
        }
    }

    #[test]
    fn unclosed_alternation_is_rejected() {
        let files = json!(["src/**/*.{rs,html"]);
        assert!(matches!(
            validate_content_globs(Some(&files)),
            Err(ConfigError::InvalidContentGlob(_))
        ));
    }
}
