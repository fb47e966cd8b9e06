//! Profile configuration.
//!
//! Profiles hold the numeric range and mastery time a learner practises
//! with. They live in a TOML file; the engine itself only ever sees the
//! resulting [`SessionConfig`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mathdrill_core::generator::MAX_OPERAND;
use mathdrill_core::model::{Operation, SelectionOrder, SessionConfig};

/// Longest mastery time a profile may ask for, in seconds.
pub const MAX_MASTERY_TIME_SECS: f64 = 60.0;

/// One learner's practice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Answers must come faster than this for a problem to be mastered.
    #[serde(default = "default_mastery_time")]
    pub mastery_time_secs: f64,
    #[serde(default)]
    pub min_value: i64,
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Operation used when `practice` is run without `--operation`.
    #[serde(default)]
    pub operation: Option<Operation>,
    #[serde(default)]
    pub order: SelectionOrder,
}

fn default_mastery_time() -> f64 {
    5.0
}
fn default_max_value() -> i64 {
    12
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            mastery_time_secs: default_mastery_time(),
            min_value: 0,
            max_value: default_max_value(),
            operation: None,
            order: SelectionOrder::default(),
        }
    }
}

impl Profile {
    /// Problems with this profile, empty when it is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !(self.mastery_time_secs > 0.0 && self.mastery_time_secs <= MAX_MASTERY_TIME_SECS) {
            problems.push(format!(
                "mastery_time_secs must be in (0, {MAX_MASTERY_TIME_SECS}], got {}",
                self.mastery_time_secs
            ));
        }
        if self.min_value < 0 {
            problems.push(format!("min_value must not be negative, got {}", self.min_value));
        }
        if self.max_value > MAX_OPERAND {
            problems.push(format!(
                "max_value must not exceed {MAX_OPERAND}, got {}",
                self.max_value
            ));
        }
        if self.min_value > self.max_value {
            problems.push(format!(
                "min_value ({}) exceeds max_value ({})",
                self.min_value, self.max_value
            ));
        }
        if self.operation == Some(Operation::Division) && self.max_value < 1 {
            problems.push("division needs max_value of at least 1".into());
        }

        problems
    }

    /// The session configuration for `operation` under this profile.
    pub fn session_config(&self, operation: Operation) -> SessionConfig {
        SessionConfig::new(
            operation,
            self.min_value,
            self.max_value,
            self.mastery_time_secs,
        )
        .with_order(self.order)
    }
}

/// Top-level mathdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Profile used when none is named.
    #[serde(default = "default_profile")]
    pub default_profile: String,
    /// Where session logs are written.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Profiles keyed by name.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

fn default_profile() -> String {
    "Default".to_string()
}
fn default_log_dir() -> PathBuf {
    PathBuf::from("./mathdrill-logs")
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            log_dir: default_log_dir(),
            profiles: BTreeMap::new(),
        }
    }
}

impl DrillConfig {
    /// Look up a profile by name, falling back to the default profile.
    ///
    /// An unnamed lookup with no matching entry yields built-in defaults; a
    /// named profile that does not exist is an error.
    pub fn profile(&self, name: Option<&str>) -> Result<(String, Profile)> {
        match name {
            Some(name) => match self.profiles.get(name) {
                Some(profile) => Ok((name.to_string(), profile.clone())),
                None => anyhow::bail!(
                    "profile '{}' not found. Available: {:?}",
                    name,
                    self.profiles.keys().collect::<Vec<_>>()
                ),
            },
            None => {
                let profile = self
                    .profiles
                    .get(&self.default_profile)
                    .cloned()
                    .unwrap_or_default();
                Ok((self.default_profile.clone(), profile))
            }
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `mathdrill.toml` in the current directory
/// 2. `~/.config/mathdrill/config.toml`
///
/// Environment variable override: `MATHDRILL_LOG_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => DrillConfig::default(),
    };

    if let Ok(dir) = std::env::var("MATHDRILL_LOG_DIR") {
        if !dir.trim().is_empty() {
            config.log_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<DrillConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<DrillConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathdrill"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DrillConfig::default();
        assert_eq!(config.default_profile, "Default");
        assert!(config.profiles.is_empty());

        let (name, profile) = config.profile(None).unwrap();
        assert_eq!(name, "Default");
        assert_eq!(profile.mastery_time_secs, 5.0);
        assert_eq!((profile.min_value, profile.max_value), (0, 12));
    }

    #[test]
    fn parse_profiles() {
        let toml_str = r#"
default_profile = "sam"
log_dir = "/tmp/drill-logs"

[profiles.sam]
mastery_time_secs = 3.0
min_value = 2
max_value = 9
operation = "multiplication"
order = "shuffled"

[profiles.alex]
max_value = 5
"#;
        let config: DrillConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profiles.len(), 2);

        let (name, sam) = config.profile(None).unwrap();
        assert_eq!(name, "sam");
        assert_eq!(sam.operation, Some(Operation::Multiplication));
        assert_eq!(sam.order, SelectionOrder::Shuffled);

        let (_, alex) = config.profile(Some("alex")).unwrap();
        assert_eq!(alex.mastery_time_secs, 5.0);
        assert_eq!(alex.min_value, 0);
    }

    #[test]
    fn missing_named_profile_is_an_error() {
        let config = DrillConfig::default();
        let err = config.profile(Some("nobody")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn validate_profile_bounds() {
        assert!(Profile::default().validate().is_empty());

        let bad = Profile {
            mastery_time_secs: 0.0,
            min_value: 8,
            max_value: 4,
            ..Default::default()
        };
        let problems = bad.validate();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("mastery_time_secs")));
        assert!(problems.iter().any(|p| p.contains("exceeds")));

        let too_big = Profile {
            max_value: MAX_OPERAND + 1,
            ..Default::default()
        };
        assert_eq!(too_big.validate().len(), 1);
    }

    #[test]
    fn session_config_from_profile() {
        let profile = Profile {
            mastery_time_secs: 4.0,
            min_value: 1,
            max_value: 6,
            operation: None,
            order: SelectionOrder::Sequential,
        };
        let config = profile.session_config(Operation::Subtraction);
        assert_eq!(config.operation, Operation::Subtraction);
        assert_eq!((config.min_value, config.max_value), (1, 6));
        assert_eq!(config.mastery_threshold_secs, 4.0);
        assert_eq!(config.order, SelectionOrder::Sequential);
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drill.toml");
        std::fs::write(&path, "[profiles.Default]\nmax_value = 7\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        let (_, profile) = config.profile(None).unwrap();
        assert_eq!(profile.max_value, 7);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/nonexistent/mathdrill.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not [valid toml }{").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
