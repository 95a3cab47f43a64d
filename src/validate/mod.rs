//! Value syntax validation (colors, content globs, keyframe selectors)

pub mod color;
pub mod glob;
pub mod keyframes;

pub use color::is_valid_color;
pub use glob::validate_content_globs;
pub use keyframes::is_valid_keyframe_selector;
