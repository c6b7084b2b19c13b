//! CLI configuration: defaults, then a YAML file, then environment, then flags.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

use cronguard_core::CronOptions;

use crate::logging::LogFormat;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// cronguard runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// `seconds` and `alias` sit at the top level of the file
    #[serde(flatten)]
    pub cron: CronOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            cron: CronOptions::default(),
        }
    }
}

/// Resolve the default config file.
/// Priority: `CRONGUARD_CONFIG` env > `<config dir>/cronguard/config.yaml`.
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CRONGUARD_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("cronguard").join(CONFIG_FILE_NAME))
}

/// An environment override that could not be parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEnv {
    pub var: &'static str,
    pub value: String,
}

impl RejectedEnv {
    /// Report the skipped value. Call once logging is installed.
    pub fn log(&self) {
        warn!(var = self.var, value = %self.value, "Ignoring invalid environment value");
    }
}

impl Config {
    /// Load from `explicit` (which must exist) or from the default location
    /// (which may be missing). Environment overrides are applied separately.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::from_file(path)
            }
            None => match config_file_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a YAML config file. An empty file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))
    }

    pub fn apply_env(&mut self) -> Vec<RejectedEnv> {
        self.apply_env_with(&std::env::vars().collect())
    }

    /// Apply `CRONGUARD_*` overrides from a provided map (useful for testing).
    /// Values that do not parse leave the config untouched and are returned.
    pub fn apply_env_with(&mut self, env: &HashMap<String, String>) -> Vec<RejectedEnv> {
        let mut rejected = Vec::new();
        if let Some(level) = env.get("CRONGUARD_LOG") {
            self.log_level = level.clone();
        }
        if let Some(raw) = env.get("CRONGUARD_LOG_FORMAT") {
            match LogFormat::parse(raw) {
                Some(format) => self.log_format = format,
                None => rejected.push(RejectedEnv {
                    var: "CRONGUARD_LOG_FORMAT",
                    value: raw.clone(),
                }),
            }
        }
        if let Some(seconds) = env_flag(env, "CRONGUARD_SECONDS", &mut rejected) {
            self.cron.seconds = seconds;
        }
        if let Some(alias) = env_flag(env, "CRONGUARD_ALIAS", &mut rejected) {
            self.cron.alias = alias;
        }
        rejected
    }
}

fn env_flag(
    env: &HashMap<String, String>,
    name: &'static str,
    rejected: &mut Vec<RejectedEnv>,
) -> Option<bool> {
    let raw = env.get(name)?;
    let flag = parse_bool(raw);
    if flag.is_none() {
        rejected.push(RejectedEnv {
            var: name,
            value: raw.clone(),
        });
    }
    flag
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
