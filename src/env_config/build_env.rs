use super::models::app_env::{AppEnv, Env};
use crate::services::homework::errors::BotError;
use std::env;
use std::str::FromStr;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_CONFIG_DIR: &str = "config";

impl AppEnv {
    /// Читает переменные окружения (с учетом `.env`, если он есть).
    pub fn new() -> Result<AppEnv, BotError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Отсутствие токенов здесь не ошибка: их наличие проверяется отдельно
    /// через `AppSettings::tokens_present`.
    pub fn from_lookup<F>(lookup: F) -> Result<AppEnv, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("ENV") {
            Some(value) if !value.trim().is_empty() => {
                Env::from_str(&value).map_err(BotError::Config)?
            }
            _ => Env::Local,
        };

        Ok(AppEnv {
            env,
            config_dir: lookup("CONFIG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string()),
            practicum_token: get_secret(&lookup, PRACTICUM_TOKEN),
            telegram_token: get_secret(&lookup, TELEGRAM_TOKEN),
            telegram_chat_id: get_secret(&lookup, TELEGRAM_CHAT_ID),
        })
    }
}

fn get_secret<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|v| v.trim().to_string()).unwrap_or_default()
}
