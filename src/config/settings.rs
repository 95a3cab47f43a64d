//! Project manifest: which settings file each build target resolves.
//!
//! Layered Defaults < `theme-resolve.toml` < `THEME_RESOLVE_*` environment.

use super::loader::discover_config;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "theme-resolve.toml";
pub const ENV_PREFIX: &str = "THEME_RESOLVE_";
/// Name of the target used when no manifest declares any.
pub const IMPLICIT_TARGET: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub default_target: Option<String>,
    /// Treat resolution diagnostics as failures.
    #[serde(default, deserialize_with = "flag")]
    pub strict: bool,
    #[serde(default)]
    pub targets: BTreeMap<String, TargetSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSettings {
    /// Settings file, relative to the project root.
    pub config: PathBuf,
}

/// A build target bound to a concrete settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub config_path: PathBuf,
}

pub fn load_settings(project_root: &Path) -> Result<ProjectSettings> {
    let manifest = project_root.join(MANIFEST_FILE);
    if manifest.exists() {
        tracing::debug!("reading project manifest {}", manifest.display());
    }
    Figment::from(Serialized::defaults(ProjectSettings::default()))
        .merge(Toml::file(&manifest))
        .merge(Env::prefixed(ENV_PREFIX).only(&["default_target", "strict"]))
        .extract()
        .with_context(|| format!("Invalid project manifest: {}", manifest.display()))
}

/// Boolean that also takes the spellings shells use: `1`/`0`, `yes`/`no`, `on`/`off`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(1) => Ok(true),
        Flag::Int(0) => Ok(false),
        Flag::Int(other) => Err(de::Error::custom(format!("expected 0 or 1, found {}", other))),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(de::Error::custom(format!("expected a boolean, found '{}'", text))),
        },
    }
}

impl ProjectSettings {
    /// All targets, in name order. Without declared targets, a single implicit
    /// target is discovered from the project root.
    pub fn targets(&self, project_root: &Path) -> Result<Vec<Target>> {
        if self.targets.is_empty() {
            let config_path = discover_config(project_root).with_context(|| {
                format!(
                    "No {} targets and no settings file found in {}",
                    MANIFEST_FILE,
                    project_root.display()
                )
            })?;
            return Ok(vec![Target { name: IMPLICIT_TARGET.to_string(), config_path }]);
        }
        Ok(self
            .targets
            .iter()
            .map(|(name, target)| Target {
                name: name.clone(),
                config_path: project_root.join(&target.config),
            })
            .collect())
    }

    /// Pick one target: the requested name, else `default_target`, else the
    /// only target there is.
    pub fn select(&self, project_root: &Path, requested: Option<&str>) -> Result<Target> {
        let mut targets = self.targets(project_root)?;
        let wanted = requested.or(self.default_target.as_deref());

        match wanted {
            Some(name) => {
                let names: Vec<String> = targets.iter().map(|t| t.name.clone()).collect();
                targets.into_iter().find(|t| t.name == name).with_context(|| {
                    format!("Unknown target '{}' (available: {})", name, names.join(", "))
                })
            }
            None if targets.len() == 1 => Ok(targets.remove(0)),
            None => anyhow::bail!(
                "Multiple targets defined; pass --target or set default_target in {}",
                MANIFEST_FILE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const TWO_PAGES: &str = r#"
default_target = "landing"

[targets.landing]
config = "landing/tailwind.config.js"

[targets.terminal]
config = "terminal/tailwind.config.js"
"#;

    // Every test runs inside a Jail: it serializes access to the process
    // environment that the env layer reads.
    fn settings_in(jail: &Jail) -> figment::error::Result<ProjectSettings> {
        load_settings(jail.directory()).map_err(|e| format!("{:#}", e).into())
    }

    #[test]
    fn manifest_targets_are_listed_in_name_order() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, TWO_PAGES)?;
            let settings = settings_in(jail)?;
            let targets = settings.targets(jail.directory()).expect("targets");
            let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["landing", "terminal"]);
            assert_eq!(targets[1].config_path, jail.directory().join("terminal/tailwind.config.js"));
            Ok(())
        });
    }

    #[test]
    fn select_uses_default_target() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, TWO_PAGES)?;
            let settings = settings_in(jail)?;
            let root = jail.directory();
            assert_eq!(settings.select(root, None).expect("default").name, "landing");
            assert_eq!(settings.select(root, Some("terminal")).expect("named").name, "terminal");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_manifest_default_target() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, TWO_PAGES)?;
            jail.set_env("THEME_RESOLVE_DEFAULT_TARGET", "terminal");
            let settings = settings_in(jail)?;
            assert_eq!(settings.default_target.as_deref(), Some("terminal"));
            assert_eq!(settings.select(jail.directory(), None).expect("target").name, "terminal");
            Ok(())
        });
    }

    #[test]
    fn env_strict_accepts_shell_spellings() {
        for (raw, expected) in
            [("true", true), ("1", true), ("yes", true), ("ON", true), ("false", false), ("0", false), ("no", false)]
        {
            Jail::expect_with(|jail| {
                jail.set_env("THEME_RESOLVE_STRICT", raw);
                assert_eq!(settings_in(jail)?.strict, expected, "THEME_RESOLVE_STRICT={}", raw);
                Ok(())
            });
        }
    }

    #[test]
    fn env_strict_rejects_other_values() {
        Jail::expect_with(|jail| {
            jail.set_env("THEME_RESOLVE_STRICT", "2");
            assert!(load_settings(jail.directory()).is_err());
            jail.set_env("THEME_RESOLVE_STRICT", "maybe");
            assert!(load_settings(jail.directory()).is_err());
            Ok(())
        });
    }

    #[test]
    fn manifest_strict_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, "strict = true\n")?;
            assert!(settings_in(jail)?.strict);
            jail.set_env("THEME_RESOLVE_STRICT", "0");
            assert!(!settings_in(jail)?.strict);
            Ok(())
        });
    }

    #[test]
    fn env_ignores_unlisted_keys() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, TWO_PAGES)?;
            jail.set_env("THEME_RESOLVE_TARGETS", "nonsense");
            assert_eq!(settings_in(jail)?.targets.len(), 2);
            Ok(())
        });
    }

    #[test]
    fn select_unknown_target_lists_available() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, TWO_PAGES)?;
            let settings = settings_in(jail)?;
            let err = settings.select(jail.directory(), Some("blog")).unwrap_err();
            assert!(err.to_string().contains("available: landing, terminal"));
            Ok(())
        });
    }

    #[test]
    fn ambiguous_selection_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(
                MANIFEST_FILE,
                "[targets.a]\nconfig = \"a.json\"\n[targets.b]\nconfig = \"b.json\"\n",
            )?;
            let settings = settings_in(jail)?;
            assert!(settings.select(jail.directory(), None).is_err());
            Ok(())
        });
    }

    #[test]
    fn implicit_target_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file("tailwind.config.json", "{}")?;
            let settings = settings_in(jail)?;
            assert_eq!(settings, ProjectSettings::default());
            let target = settings.select(jail.directory(), None).expect("target");
            assert_eq!(target.name, IMPLICIT_TARGET);
            assert!(target.config_path.ends_with("tailwind.config.json"));
            Ok(())
        });
    }

    #[test]
    fn no_manifest_and_no_settings_is_an_error() {
        Jail::expect_with(|jail| {
            let settings = settings_in(jail)?;
            assert!(settings.targets(jail.directory()).is_err());
            Ok(())
        });
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(MANIFEST_FILE, "[targets.a]\nconfig = 3\n")?;
            assert!(load_settings(jail.directory()).is_err());
            Ok(())
        });
    }
}
