use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_CONFIG_FILE: &str = "trademark-scout.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server: ServerConfig,
    pub vision: VisionConfig,
    pub registry: RegistryConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_logo_results: u32,
    pub max_object_results: u32,
    pub max_label_results: u32,
    pub max_color_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub color_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: None,
            max_body_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://vision.googleapis.com/v1/images:annotate".to_string(),
            api_key: None,
            timeout_secs: 30,
            max_logo_results: 5,
            max_object_results: 10,
            max_label_results: 10,
            max_color_results: 5,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tsdrapi.uspto.gov/ts/cd/casestatus/design".to_string(),
            api_key: None,
            timeout_secs: 15,
            concurrency: 8,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            color_threshold: crate::classifier::DEFAULT_COLOR_THRESHOLD,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl VisionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Configuration {
    /// Defaults, then the optional config file (`SCOUT_CONFIG` or `trademark-scout.toml`),
    /// then `SCOUT_<SECTION>__<KEY>` variables, then `GOOGLE_CLOUD_API_KEY` / `USPTO_API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SCOUT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = Self::defaults()?
            .add_source(File::from(path.as_path()).required(false))
            .add_source(
                Environment::with_prefix("SCOUT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("vision.api_key", std::env::var("GOOGLE_CLOUD_API_KEY").ok())?
            .set_override_option("registry.api_key", std::env::var("USPTO_API_KEY").ok())?;

        Self::finish(builder)
    }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(document, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder().add_source(Config::try_from(&Configuration::default())?))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let configuration: Configuration = builder.build()?.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vision.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::Invalid {
                key: "vision.api_key",
                reason: "a vision API key is required (GOOGLE_CLOUD_API_KEY)".to_string(),
            });
        }
        if self.registry.concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "registry.concurrency",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.classifier.color_threshold) {
            return Err(ConfigError::Invalid {
                key: "classifier.color_threshold",
                reason: format!("{} is outside 0..1", self.classifier.color_threshold),
            });
        }
        Ok(())
    }
}
