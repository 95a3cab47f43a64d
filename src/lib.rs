//! theme-resolve: load, validate and merge utility-CSS theme settings
//!
//! A settings object (content globs, theme, plugins) is validated and its
//! `theme.extend` categories are shallow-merged over a built-in default theme.
//! The merged, read-only [`Config`] is what an external style generator
//! consumes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod resolve;
pub mod validate;

pub use domain::Config;
pub use error::{ConfigError, Diagnostic};
pub use resolve::{resolve, resolve_with_diagnostics, Resolution};
