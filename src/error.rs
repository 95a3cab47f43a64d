//! Error and diagnostic types for theme resolution.

use std::fmt;
use thiserror::Error;

/// Fatal resolution failure. Resolution is atomic: any of these aborts the
/// whole configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `content.files` is missing, empty, or holds an entry that is not a usable glob.
    #[error("Invalid content glob: {0}")]
    InvalidContentGlob(String),

    /// A color entry failed syntax validation.
    #[error("Invalid color value for `{key}`: {value:?}")]
    InvalidColorValue { key: String, value: String },

    /// A keyframe selector is neither a percentage nor `from`/`to`.
    #[error("Invalid keyframe selector `{selector}` in `{animation}`")]
    InvalidKeyframeSelector { animation: String, selector: String },

    /// A recognized field holds a value of the wrong type.
    #[error("Invalid value at `{path}`: expected {expected}")]
    InvalidShape { path: String, expected: String },
}

impl ConfigError {
    pub(crate) fn shape(path: impl Into<String>, expected: impl Into<String>) -> Self {
        ConfigError::InvalidShape { path: path.into(), expected: expected.into() }
    }
}

/// Result type alias for resolution.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-blocking finding reported alongside a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `theme.extend` holds a category this resolver does not merge. The value
    /// is passed through untouched.
    UnrecognizedExtendKey(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedExtendKey(key) => {
                write!(f, "unrecognized theme.extend key `{}` (passed through unchanged)", key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_names_offending_key() {
        let err = ConfigError::InvalidColorValue {
            key: "accent".to_string(),
            value: "#zzz".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid color value for `accent`: \"#zzz\"");
    }

    #[test]
    fn diagnostic_display_mentions_key() {
        let diag = Diagnostic::UnrecognizedExtendKey("fontFamaily".to_string());
        insta::assert_snapshot!(
            diag.to_string(),
            @"unrecognized theme.extend key `fontFamaily` (passed through unchanged)"
        );
    }
}
