use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub dir: String,
    #[serde(default = "default_durable_file")]
    pub durable_file: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_timeout_secs() -> u64 { 30 }
fn default_durable_file() -> String { "local.json".to_string() }
fn default_session_file() -> String { "session.json".to_string() }
fn default_page_size() -> u32 { 12 }
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl StorageSettings {
    /// Storage directory with `~` and `$VARS` expanded
    pub fn resolved_dir(&self) -> Result<PathBuf, ConfigError> {
        let expanded = shellexpand::full(&self.dir)
            .map_err(|e| ConfigError::Message(format!("Invalid storage dir {}: {}", self.dir, e)))?;
        Ok(PathBuf::from(expanded.as_ref()))
    }

    pub fn durable_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.resolved_dir()?.join(&self.durable_file))
    }

    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.resolved_dir()?.join(&self.session_file))
    }
}

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables prefixed with PAWS, e.g. PAWS__API__BASE_URL
    /// 5. PAWS_API_URL as a shortcut for the service URL
    pub fn load() -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source());

        apply_overrides(builder.build()?)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source());

        apply_overrides(builder.build()?)?.try_deserialize()
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.timeout_secs", default_timeout_secs() as i64)?
        .set_default("storage.dir", "~/.config/paws-match")?
        .set_default("search.page_size", default_page_size() as i64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn env_source() -> Environment {
    Environment::with_prefix("PAWS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply single-variable overrides that do not follow the PAWS__ scheme
fn apply_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = std::env::var("PAWS_API_URL") {
        builder = builder.set_override("api.base_url", url)?;
    }

    builder.build()
}
