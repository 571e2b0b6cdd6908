//! Configuration support for einv-sol.
//!
//! Remote endpoints and the API key come from the environment, optionally
//! seeded from a `.env` file. Run settings (submitting user, directories, log
//! file) come from CLI flags, an optional `einv-sol.config.yml`, the
//! environment, and built-in defaults, in that order of precedence.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::logging::DEFAULT_LOG_FILE;
use crate::shared::error::EinvError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "einv-sol.config.yml";
pub const ENV_FILENAME: &str = ".env";
pub const DEFAULT_SOLUTIONS_DIR: &str = "Solutions";

pub const CREATE_URL_VAR: &str = "create";
pub const EXPORT_URL_VAR: &str = "export";
pub const API_KEY_VAR: &str = "X_API_KEY";
pub const CREATED_USER_VAR: &str = "CREATED_USER";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub created_user: Option<String>,
    pub solutions_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning per unknown key, sorted by key.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref user) = config.created_user {
        if user.trim().is_empty() {
            bail!(
                "Invalid config: created_user must not be empty.\n\n\
                 💡 Hint: Set created_user to the account submitting the solution, or remove the key."
            );
        }
    }
    Ok(())
}

/// Loads variables from an env file into the process environment.
///
/// Variables already set in the environment win. A missing file is not an
/// error; returns whether a file was loaded.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path)
        .with_context(|| format!("Failed to load env file: {}", path.display()))?;
    Ok(true)
}

/// Log file named by the config, or the default one in `working_dir`
pub fn resolve_log_file(config: Option<&ConfigFile>, working_dir: &Path) -> PathBuf {
    config
        .and_then(|c| c.log_file.clone())
        .unwrap_or_else(|| working_dir.join(DEFAULT_LOG_FILE))
}

/// Remote endpoints and credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub create_url: String,
    pub export_base_url: String,
    pub api_key: String,
}

impl ApiEndpoints {
    /// Reads the endpoints from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the endpoints through `lookup`; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    EinvError::Configuration {
                        message: format!("Environment variable `{}` is not set", key),
                        hint: format!(
                            "Add `{}=...` to the {} file in the working directory or export it before running",
                            key, ENV_FILENAME
                        ),
                    }
                    .into()
                })
        };

        Ok(Self {
            create_url: require(CREATE_URL_VAR)?,
            export_base_url: require(EXPORT_URL_VAR)?,
            api_key: require(API_KEY_VAR)?,
        })
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub solutions_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub created_user: Option<String>,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub solutions_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub created_user: String,
}

impl Settings {
    /// Merges CLI overrides, the config file and the environment
    ///
    /// Relative defaults are anchored at `working_dir`.
    ///
    /// # Errors
    /// Returns a configuration error when no submitting user is configured
    pub fn resolve<F>(
        overrides: &SettingsOverrides,
        config: Option<&ConfigFile>,
        working_dir: &Path,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let solutions_dir = overrides
            .solutions_dir
            .clone()
            .or_else(|| config.and_then(|c| c.solutions_dir.clone()))
            .unwrap_or_else(|| working_dir.join(DEFAULT_SOLUTIONS_DIR));

        let output_dir = overrides
            .output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| working_dir.to_path_buf());

        let log_file = resolve_log_file(config, working_dir);

        let created_user = overrides
            .created_user
            .clone()
            .or_else(|| config.and_then(|c| c.created_user.clone()))
            .or_else(|| lookup(CREATED_USER_VAR))
            .filter(|user| !user.trim().is_empty())
            .ok_or_else(|| EinvError::Configuration {
                message: "No submitting user is configured".to_string(),
                hint: format!(
                    "Pass --user, set created_user in {}, or set {}",
                    CONFIG_FILENAME, CREATED_USER_VAR
                ),
            })?;

        Ok(Self {
            solutions_dir,
            output_dir,
            log_file,
            created_user,
        })
    }
}
