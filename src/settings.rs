//! Layered settings.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. `config.toml` in the platform config directory
//! 3. Environment variables with the `FINBOARD_` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const ENV_PREFIX: &str = "FINBOARD";
const DEFAULT_MONTHLY_LIMIT: i64 = 1200;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("monthly_limit must not be negative (got {0})")]
    NegativeLimit(Decimal),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Starting value of the overall monthly budget limit.
    pub(crate) monthly_limit: Decimal,
    /// Load the demo budgets and expenses on startup.
    pub(crate) seed_demo_data: bool,
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub(crate) log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_limit: Decimal::from(DEFAULT_MONTHLY_LIMIT),
            seed_demo_data: true,
            log_level: "info".into(),
        }
    }
}

impl Settings {
    /// Load from `path` (if it exists) and the process environment.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_sources(
        path: Option<&Path>,
        env: Environment,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;

        if settings.monthly_limit.is_sign_negative() && !settings.monthly_limit.is_zero() {
            return Err(SettingsError::NegativeLimit(settings.monthly_limit));
        }
        Ok(settings)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "finboard", "finboard")
}

/// Location of `config.toml`, if the platform has a config directory.
pub(crate) fn config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Platform data directory, created on first use.
pub(crate) fn data_dir() -> anyhow::Result<PathBuf> {
    use anyhow::Context;

    let dirs = project_dirs().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use rust_decimal_macros::dec;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert((*k).to_string(), (*v).to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_sources(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.monthly_limit, dec!(1200));
        assert!(settings.seed_demo_data);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let settings = Settings::from_sources(Some(&path), env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config("monthly_limit = 950.5\nseed_demo_data = false\n");
        let settings = Settings::from_sources(Some(file.path()), env(&[])).unwrap();
        assert_eq!(settings.monthly_limit, dec!(950.5));
        assert!(!settings.seed_demo_data);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("monthly_limit = 950\nlog_level = \"warn\"\n");
        let settings = Settings::from_sources(
            Some(file.path()),
            env(&[("FINBOARD_MONTHLY_LIMIT", "1500"), ("FINBOARD_LOG_LEVEL", "debug")]),
        )
        .unwrap();
        assert_eq!(settings.monthly_limit, dec!(1500));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_negative_limit_rejected() {
        let file = write_config("monthly_limit = -10\n");
        let err = Settings::from_sources(Some(file.path()), env(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::NegativeLimit(_)));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("monthly_limit = [1, 2\n");
        let err = Settings::from_sources(Some(file.path()), env(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::Load(_)));
    }
}
