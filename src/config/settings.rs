use crate::agents::RoutingTable;
use anyhow::Result;
use config::{Config, ConfigError, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub router: RoutingTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load `config/{CONFIG_ENV}` (optional) overlaid with `APP__*` variables
    pub fn new() -> Result<Self> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::load(Path::new("config"), &config_env, Self::environment())
    }

    /// Load an explicit settings file overlaid with `APP__*` variables
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(File::from(path).required(true), Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP").separator("__")
    }

    /// `{config_dir}/{config_env}` with any extension `config` recognizes
    fn load(config_dir: &Path, config_env: &str, environment: Environment) -> Result<Self> {
        let base = config_dir.join(config_env);
        let file = File::with_name(&base.to_string_lossy()).required(false);
        Self::build(file, environment)
    }

    fn build<S>(file: S, environment: Environment) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e: ConfigError| anyhow::anyhow!("Failed to load settings: {}", e))?;
        settings.router.validate()?;
        Ok(settings)
    }
}
