use super::models::{app_config::AppConfig, app_env::AppEnv};
use crate::services::homework::errors::BotError;
use std::fs;
use std::path::PathBuf;

impl AppConfig {
    /// Загружает `<config_dir>/<env>.toml`.
    pub fn new(app_env: &AppEnv) -> Result<AppConfig, BotError> {
        let path = PathBuf::from(&app_env.config_dir).join(format!("{}.toml", app_env.env));
        let raw = fs::read_to_string(&path).map_err(|e| {
            BotError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<AppConfig, BotError> {
        toml::from_str(raw).map_err(|e| BotError::Config(format!("invalid config: {}", e)))
    }
}
