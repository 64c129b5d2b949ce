//! Persistent defaults for worklog.
//!
//! The configuration holds the values `add` falls back to when a flag is
//! omitted (consultant, client, project, rate), the preferred language, and
//! an optional database location.
//!
//! ## Sources
//!
//! [`Config::load`] layers three sources, later ones winning:
//!
//! 1. Built-in defaults (everything unset)
//! 2. `config.json` in the data directory
//! 3. `WORKLOG_*` environment variables, with `__` separating nested keys
//!    (`WORKLOG_DEFAULT_RATE=95`, `WORKLOG_DATABASE__PATH=/tmp/ledger.db`)
//!
//! [`Config::read`] only reads the file. `config set` and `config clear`
//! work on that file-only view so environment overrides never get written
//! back to disk.
//!
//! ```rust,no_run
//! use worklog::libs::config::{Config, ConfigUpdate};
//!
//! let mut config = Config::read()?;
//! config.apply(ConfigUpdate { consultant: Some("Alice".into()), ..Default::default() });
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "worklog.db";
pub const ENV_PREFIX: &str = "WORKLOG_";

/// Languages with a complete message catalogue.
pub const SUPPORTED_LANGUAGES: [&str; 1] = ["en"];

/// Free-text settings taken from the environment verbatim, as
/// `(variable suffix, config key)`. figment would otherwise read a project
/// called `2024` as a number and reject it for a string field.
const VERBATIM_ENV_KEYS: [(&str, &str); 5] = [
    ("DEFAULT_CONSULTANT", "default_consultant"),
    ("DEFAULT_CLIENT", "default_client"),
    ("DEFAULT_PROJECT", "default_project"),
    ("LANGUAGE", "language"),
    ("DATABASE__PATH", "database.path"),
];

/// `WORKLOG_*` variables the parsed environment layer skips: process
/// switches, plus everything in [`VERBATIM_ENV_KEYS`].
const SKIPPED_ENV_KEYS: [&str; 7] = [
    "home",
    "debug",
    "default_consultant",
    "default_client",
    "default_project",
    "language",
    "database__path",
];

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit SQLite file. Defaults to `worklog.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    fn is_empty(&self) -> bool {
        self.path.is_none()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_consultant: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_client: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "DatabaseConfig::is_empty")]
    pub database: DatabaseConfig,
}

/// Values passed to `config set`. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub consultant: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub rate: Option<f64>,
    pub language: Option<String>,
    pub db_path: Option<PathBuf>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.consultant.is_none()
            && self.client.is_none()
            && self.project.is_none()
            && self.rate.is_none()
            && self.language.is_none()
            && self.db_path.is_none()
    }

    /// Rejects a language that has no message catalogue.
    pub fn validate(&self) -> LedgerResult<()> {
        match self.language.as_deref() {
            Some(language) if !language.is_empty() && !SUPPORTED_LANGUAGES.contains(&language) => Err(LedgerError::Validation(
                Message::UnsupportedLanguage(language.to_string(), SUPPORTED_LANGUAGES.join(", ")),
            )),
            _ => Ok(()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads `config.json` only, without environment overrides.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::config_path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        // No file yet means nothing has been configured
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| Message::ConfigReadFailed(path.display().to_string()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigReadFailed(path.display().to_string()))?;
        Ok(config)
    }

    /// Effective configuration: defaults, then the file, then `WORKLOG_*` variables.
    pub fn load() -> Result<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&SKIPPED_ENV_KEYS).split("__"));

        for (suffix, key) in VERBATIM_ENV_KEYS {
            if let Ok(value) = std::env::var(format!("{}{}", ENV_PREFIX, suffix)) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config: Config = figment
            .extract()
            .with_context(|| Message::ConfigReadFailed(path.display().to_string()))?;

        Ok(config.normalized())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| Message::ConfigSaveFailed(path.display().to_string()))?;
        }

        let config_file = File::create(path).with_context(|| Message::ConfigSaveFailed(path.display().to_string()))?;
        serde_json::to_writer_pretty(&config_file, &self).with_context(|| Message::ConfigSaveFailed(path.display().to_string()))?;
        Ok(())
    }

    /// Merges `update` into the configuration. Empty strings and
    /// non-positive rates are ignored.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(consultant) = non_empty(update.consultant) {
            self.default_consultant = Some(consultant);
        }
        if let Some(client) = non_empty(update.client) {
            self.default_client = Some(client);
        }
        if let Some(project) = non_empty(update.project) {
            self.default_project = Some(project);
        }
        if let Some(rate) = update.rate.filter(|r| *r > 0.0) {
            self.default_rate = Some(rate);
        }
        if let Some(language) = non_empty(update.language) {
            self.language = Some(language);
        }
        if let Some(path) = update.db_path {
            self.database.path = Some(path);
        }
    }

    /// Drops the stored defaults and database location. Language is kept.
    pub fn clear(&mut self) {
        self.default_consultant = None;
        self.default_client = None;
        self.default_project = None;
        self.default_rate = None;
        self.database = DatabaseConfig::default();
    }

    pub fn has_defaults(&self) -> bool {
        self.default_consultant.is_some()
            || self.default_client.is_some()
            || self.default_project.is_some()
            || self.default_rate.is_some()
    }

    /// SQLite file to open: the configured path or `worklog.db` in the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    // Environment variables can carry empty strings; treat them as unset.
    fn normalized(mut self) -> Self {
        self.default_consultant = non_empty(self.default_consultant);
        self.default_client = non_empty(self.default_client);
        self.default_project = non_empty(self.default_project);
        self.language = non_empty(self.language);
        self.default_rate = self.default_rate.filter(|r| *r > 0.0);
        self
    }
}
