use crate::env_config::models::app_config::TelegramConfig;
use crate::services::homework::errors::BotError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Канал доставки уведомлений.
#[async_trait]
pub trait TraitMessenger {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}

pub struct StructTelegramBot {
    client: Client,
    send_message_url: String,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl StructTelegramBot {
    pub fn new(config: &TelegramConfig, token: &str) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BotError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                config.api_url.trim_end_matches('/'),
                token
            ),
        })
    }
}

#[async_trait]
impl TraitMessenger for StructTelegramBot {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        debug!("Sending message to chat {}", chat_id);

        // В URL лежит токен бота, поэтому он вырезается из текста ошибки
        let response = self
            .client
            .post(&self.send_message_url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse {
                description: Some(description),
                ..
            }) => Err(BotError::Delivery(description)),
            _ => Err(BotError::Delivery(format!(
                "Telegram API responded with status {}",
                status.as_u16()
            ))),
        }
    }
}
