/// Application configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tune_playback::PlaybackConfig;
use tune_service_client::ServiceConfig;
use tune_storage::JsonFileStore;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "tunedeck.toml";

/// Prefix for environment overrides, e.g. `TUNEDECK_SERVICE__BASE_URL`
pub const ENV_PREFIX: &str = "TUNEDECK";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Most-played file; the platform data directory is used when unset
    #[serde(default)]
    pub most_played_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_promotion_threshold")]
    pub promotion_threshold: f64,

    #[serde(default = "default_skip_step_secs")]
    pub skip_step_secs: f64,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `tunedeck.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with TUNEDECK_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document (no file or environment lookup)
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "service.base_url is required (set TUNEDECK_SERVICE__BASE_URL)".to_string(),
            ));
        }

        if self.service.timeout_secs == 0 || self.service.connect_timeout_secs == 0 {
            return Err(AppError::Config("service timeouts must be positive".to_string()));
        }

        let threshold = self.playback.promotion_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(AppError::Config(format!(
                "playback.promotion_threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        let step = self.playback.skip_step_secs;
        if !step.is_finite() || step <= 0.0 {
            return Err(AppError::Config(format!(
                "playback.skip_step_secs must be positive, got {}",
                step
            )));
        }

        Ok(())
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.service.base_url.clone(),
            timeout: Duration::from_secs(self.service.timeout_secs),
            connect_timeout: Duration::from_secs(self.service.connect_timeout_secs),
        }
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            promotion_threshold: self.playback.promotion_threshold,
            skip_step: self.playback.skip_step_secs,
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
        }
    }

    /// Most-played store at the configured or default location
    pub fn most_played_store(&self) -> Result<JsonFileStore> {
        match &self.storage.most_played_path {
            Some(path) => Ok(JsonFileStore::new(path)),
            None => Ok(JsonFileStore::open_default()?),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            promotion_threshold: default_promotion_threshold(),
            skip_step_secs: default_skip_step_secs(),
            shuffle: false,
            repeat: false,
        }
    }
}

// Default values
fn default_base_url() -> String {
    tune_service_client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_promotion_threshold() -> f64 {
    tune_playback::DEFAULT_PROMOTION_THRESHOLD
}

fn default_skip_step_secs() -> f64 {
    tune_playback::DEFAULT_SKIP_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config.service.base_url, tune_service_client::DEFAULT_BASE_URL);
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.service.connect_timeout_secs, 10);
        assert_eq!(config.playback.promotion_threshold, 0.75);
        assert_eq!(config.playback.skip_step_secs, 10.0);
        assert!(!config.playback.shuffle);
        assert!(config.storage.most_played_path.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [service]
            base_url = "http://localhost:5000"

            [storage]
            most_played_path = "/tmp/mp.json"

            [playback]
            promotion_threshold = 0.5
            shuffle = true
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "http://localhost:5000");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(
            config.storage.most_played_path.as_deref(),
            Some(Path::new("/tmp/mp.json"))
        );

        let playback = config.playback_config();
        assert_eq!(playback.promotion_threshold, 0.5);
        assert_eq!(playback.skip_step, 10.0);
        assert!(playback.shuffle);
        assert!(!playback.repeat);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for bad in ["0.0", "1.5", "-0.2"] {
            let doc = format!("[playback]\npromotion_threshold = {}", bad);
            assert!(
                matches!(AppConfig::from_toml(&doc), Err(AppError::Config(_))),
                "threshold {} accepted",
                bad
            );
        }
        assert!(AppConfig::from_toml("[playback]\npromotion_threshold = 1.0").is_ok());
    }

    #[test]
    fn rejects_non_positive_skip_step() {
        assert!(AppConfig::from_toml("[playback]\nskip_step_secs = 0.0").is_err());
    }

    #[test]
    fn rejects_blank_base_url() {
        assert!(AppConfig::from_toml("[service]\nbase_url = \"  \"").is_err());
    }

    #[test]
    fn service_config_carries_timeouts() {
        let config = AppConfig::from_toml("[service]\ntimeout_secs = 5").unwrap();
        let service = config.service_config();
        assert_eq!(service.timeout, Duration::from_secs(5));
        assert_eq!(service.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn explicit_store_path_is_used() {
        let config = AppConfig::from_toml("[storage]\nmost_played_path = \"mp.json\"").unwrap();
        let store = config.most_played_store().unwrap();
        assert_eq!(store.path(), Path::new("mp.json"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/definitely/not/here/tunedeck.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
