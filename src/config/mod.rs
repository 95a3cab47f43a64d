//! Settings loading and build-target selection
//!
//! Settings files are read by format-specific sources; the optional project
//! manifest maps build targets to settings files with proper precedence
//! (Env > File > Defaults).

pub mod js_module;
pub mod loader;
pub mod settings;

pub use loader::{discover_config, load_raw, source_for_path, SettingsSource};
pub use settings::{load_settings, ProjectSettings, Target};
