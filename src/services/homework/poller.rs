// File: src/services/homework/poller.rs
use super::checker::{check_response, parse_status};
use super::errors::BotError;
use crate::app_state::models::AppState;
use crate::utils::time_format::format_timestamp;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Результат одной итерации опроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// Новый статус отправлен в чат
    Notified,
    /// Статус совпал с последним отправленным сообщением
    Unchanged,
    /// В ответе нет работ
    NoUpdates,
    /// Итерация завершилась ошибкой; `reported` показывает, ушло ли сообщение о ней в чат
    Failed { reported: bool },
}

pub struct HomeworkPoller {
    app_state: Arc<AppState>,
    cursor: Option<i64>,
    previous_message: String,
}

impl HomeworkPoller {
    pub fn new(app_state: Arc<AppState>, start_time: i64) -> Self {
        Self {
            app_state,
            cursor: Some(start_time),
            previous_message: String::new(),
        }
    }

    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn previous_message(&self) -> &str {
        &self.previous_message
    }

    /// Запускает бесконечный цикл опроса. Пауза между итерациями одинакова
    /// при любом исходе.
    pub async fn start(mut self) {
        let retry_time = self.app_state.settings.app_config.poller.retry_time();
        info!(
            "Starting homework poller with {} second interval",
            retry_time.as_secs()
        );

        loop {
            let outcome = self.poll_once().await;
            debug!(
                "Iteration finished: {:?}, cursor={:?}, last message: {:?}",
                outcome,
                self.cursor(),
                self.previous_message()
            );
            tokio::time::sleep(retry_time).await;
        }
    }

    /// Одна итерация: запрос, проверка, уведомление.
    pub async fn poll_once(&mut self) -> IterationOutcome {
        let (message, current_date) = match self.check_updates().await {
            Ok(update) => update,
            Err(err) => return self.report_failure(err).await,
        };

        let outcome = match message {
            None => {
                debug!("No new homework statuses in the response");
                IterationOutcome::NoUpdates
            }
            Some(message) if message == self.previous_message => {
                debug!("Status has not changed since the last notification");
                IterationOutcome::Unchanged
            }
            Some(message) => match self.send_message(&message).await {
                Ok(()) => {
                    self.previous_message = message;
                    IterationOutcome::Notified
                }
                // Курсор не сдвигается: статус будет получен повторно
                Err(err) => return self.report_failure(err).await,
            },
        };

        debug!(
            "Advancing cursor to {} ({})",
            current_date,
            format_timestamp(current_date)
        );
        self.cursor = Some(current_date);
        outcome
    }

    /// Отправляет сообщение в настроенный чат.
    pub async fn send_message(&self, message: &str) -> Result<(), BotError> {
        let chat_id = &self.app_state.settings.app_env.telegram_chat_id;

        self.app_state
            .messenger
            .send_message(chat_id, message)
            .await
            .map_err(|err| match err {
                BotError::Delivery(_) => err,
                other => BotError::Delivery(other.to_string()),
            })?;

        info!("Message sent: {}", message);
        Ok(())
    }

    async fn check_updates(&self) -> Result<(Option<String>, i64), BotError> {
        let response = self
            .app_state
            .homework_api
            .get_homework_statuses(self.cursor)
            .await?;
        let statuses = check_response(&response)?;

        let message = match statuses.homeworks.first() {
            Some(homework) => Some(parse_status(homework)?),
            None => None,
        };

        Ok((message, statuses.current_date))
    }

    // Ошибка доставки самого отчета только логируется, цикл продолжает работу
    async fn report_failure(&mut self, err: BotError) -> IterationOutcome {
        let message = format!("Сбой в работе программы: {}", err);
        error!("{}", message);

        if message == self.previous_message {
            debug!("Error report already sent, skipping");
            return IterationOutcome::Failed { reported: false };
        }

        match self.send_message(&message).await {
            Ok(()) => {
                self.previous_message = message;
                IterationOutcome::Failed { reported: true }
            }
            Err(delivery_err) => {
                error!("Failed to deliver error report: {}", delivery_err);
                IterationOutcome::Failed { reported: false }
            }
        }
    }
}
