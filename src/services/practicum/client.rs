use crate::env_config::models::app_config::PracticumConfig;
use crate::services::homework::errors::{BotError, MalformedResponse};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Источник статусов домашних работ.
#[async_trait]
pub trait TraitHomeworkApi {
    /// Запрашивает статусы, изменившиеся начиная с `from_date`.
    /// Без отметки времени используется текущий момент.
    async fn get_homework_statuses(&self, from_date: Option<i64>) -> Result<Value, BotError>;
}

pub struct StructPracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl StructPracticumClient {
    pub fn new(config: &PracticumConfig, token: &str) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BotError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl TraitHomeworkApi for StructPracticumClient {
    async fn get_homework_statuses(&self, from_date: Option<i64>) -> Result<Value, BotError> {
        let timestamp = from_date.unwrap_or_else(|| Utc::now().timestamp());
        info!("Requesting homework statuses from_date={}", timestamp);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| BotError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| MalformedResponse::InvalidJson(e.without_url().to_string()))?;

        debug!("Received API response: {}", body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Recorded {
        requests: Arc<Mutex<Vec<(Option<String>, Option<String>)>>>,
    }

    async fn statuses_handler(
        State(recorded): State<Recorded>,
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        recorded
            .requests
            .lock()
            .unwrap()
            .push((auth, params.get("from_date").cloned()));
        Json(json!({"homeworks": [], "current_date": 1000}))
    }

    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/user_api/homework_statuses/", addr)
    }

    fn config(endpoint: String) -> PracticumConfig {
        PracticumConfig {
            endpoint,
            request_timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_sends_token_and_cursor() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route("/api/user_api/homework_statuses/", get(statuses_handler))
            .with_state(recorded.clone());
        let endpoint = spawn_server(router).await;

        let client = StructPracticumClient::new(&config(endpoint), "secret").unwrap();
        let body = client.get_homework_statuses(Some(1234)).await.unwrap();

        assert_eq!(body, json!({"homeworks": [], "current_date": 1000}));
        let requests = recorded.requests.lock().unwrap();
        assert_eq!(
            requests.as_slice(),
            &[(Some("OAuth secret".to_string()), Some("1234".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_missing_cursor_falls_back_to_now() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route("/api/user_api/homework_statuses/", get(statuses_handler))
            .with_state(recorded.clone());
        let endpoint = spawn_server(router).await;

        let before = Utc::now().timestamp();
        let client = StructPracticumClient::new(&config(endpoint), "secret").unwrap();
        client.get_homework_statuses(None).await.unwrap();
        let after = Utc::now().timestamp();

        let requests = recorded.requests.lock().unwrap();
        let sent: i64 = requests[0].1.as_deref().unwrap().parse().unwrap();
        assert!(before <= sent && sent <= after);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/api/user_api/homework_statuses/",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let endpoint = spawn_server(router).await;

        let client = StructPracticumClient::new(&config(endpoint.clone()), "secret").unwrap();
        let result = client.get_homework_statuses(Some(1)).await;

        match result {
            Err(BotError::UnexpectedStatus {
                endpoint: reported,
                status,
            }) => {
                assert_eq!(status, 503);
                assert_eq!(reported, endpoint);
            }
            other => panic!("expected unexpected status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let router = Router::new().route(
            "/api/user_api/homework_statuses/",
            get(|| async { "not json" }),
        );
        let endpoint = spawn_server(router).await;

        let client = StructPracticumClient::new(&config(endpoint), "secret").unwrap();
        let result = client.get_homework_statuses(Some(1)).await;

        assert!(matches!(
            result,
            Err(BotError::MalformedResponse(MalformedResponse::InvalidJson(_)))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Порт 1 на loopback никто не слушает
        let client = StructPracticumClient::new(
            &config("http://127.0.0.1:1/api/user_api/homework_statuses/".to_string()),
            "secret",
        )
        .unwrap();
        let result = client.get_homework_statuses(Some(1)).await;

        assert!(matches!(result, Err(BotError::Transport(_))));
    }
}
