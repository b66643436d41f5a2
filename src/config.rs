use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_THREADS_VAR: &str = "JULIA_MAX_THREADS";
pub const MAX_WAIT_TIME_VAR: &str = "JULIA_MAX_WAIT_TIME";
pub const IMAGE_FOLDER_VAR: &str = "JULIA_IMAGE_FOLDER";

pub const DEFAULT_MAX_WAIT_TIME_SECS: u64 = 30;
pub const DEFAULT_IMAGE_FOLDER: &str = "images";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("max wait time must be at least one second")]
    ZeroWaitTime,
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_max_threads() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

fn default_max_wait_time_secs() -> u64 {
    DEFAULT_MAX_WAIT_TIME_SECS
}

fn default_image_folder() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGE_FOLDER)
}

/// Engine settings: worker pool size, fill deadline and where images live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "default_max_threads")]
    max_threads: NonZeroUsize,
    #[serde(default = "default_max_wait_time_secs")]
    max_wait_time_secs: u64,
    #[serde(default = "default_image_folder")]
    image_folder: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_threads: default_max_threads(),
            max_wait_time_secs: DEFAULT_MAX_WAIT_TIME_SECS,
            image_folder: default_image_folder(),
        }
    }
}

fn parse_positive<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

impl EngineConfig {
    pub fn new(
        max_threads: NonZeroUsize,
        max_wait_time_secs: u64,
        image_folder: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self {
            max_threads,
            max_wait_time_secs,
            image_folder: image_folder.into(),
        }
        .validated()
    }

    /// Reads a `.env` file when present, then the `JULIA_*` variables. Unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`EngineConfig::from_env`] but with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(MAX_THREADS_VAR) {
            config.max_threads = parse_positive(MAX_THREADS_VAR, &value)?;
        }

        if let Some(value) = lookup(MAX_WAIT_TIME_VAR) {
            config.max_wait_time_secs = parse_positive(MAX_WAIT_TIME_VAR, &value)?;
        }

        if let Some(value) = lookup(IMAGE_FOLDER_VAR) {
            config.image_folder = PathBuf::from(value);
        }

        config.validated()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_wait_time_secs == 0 {
            return Err(ConfigError::ZeroWaitTime);
        }

        Ok(self)
    }

    #[must_use]
    pub fn max_threads(&self) -> NonZeroUsize {
        self.max_threads
    }

    #[must_use]
    pub fn max_wait_time(&self) -> Duration {
        Duration::from_secs(self.max_wait_time_secs)
    }

    #[must_use]
    pub fn image_folder(&self) -> &PathBuf {
        &self.image_folder
    }
}
