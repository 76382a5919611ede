use super::{app_config::AppConfig, app_env::AppEnv};
use crate::env_config::build_env::{PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};

#[derive(Debug)]
pub struct AppSettings {
    pub app_config: AppConfig,
    pub app_env: AppEnv,
}

impl AppSettings {
    /// Все три обязательных значения заданы и не пусты.
    pub fn tokens_present(&self) -> bool {
        self.missing_tokens().is_empty()
    }

    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.app_env.practicum_token),
            (TELEGRAM_TOKEN, &self.app_env.telegram_token),
            (TELEGRAM_CHAT_ID, &self.app_env.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_config::models::app_env::Env;

    fn settings(practicum: &str, telegram: &str, chat_id: &str) -> AppSettings {
        AppSettings {
            app_config: AppConfig::from_toml("[log]\nlevel = \"info\"\nformat = \"plain\"\n")
                .unwrap(),
            app_env: AppEnv {
                env: Env::Local,
                config_dir: "config".to_string(),
                practicum_token: practicum.to_string(),
                telegram_token: telegram.to_string(),
                telegram_chat_id: chat_id.to_string(),
            },
        }
    }

    #[test]
    fn test_tokens_present() {
        assert!(settings("p", "t", "1").tokens_present());
    }

    #[test]
    fn test_missing_tokens_are_named() {
        let settings = settings("", "t", "");
        assert!(!settings.tokens_present());
        assert_eq!(
            settings.missing_tokens(),
            vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]
        );
    }
}
