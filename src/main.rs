mod app_state;
mod env_config;
mod logger;
mod services;
mod utils;

use app_state::models::AppState;
use chrono::Utc;
use env_config::models::{app_config::AppConfig, app_env::AppEnv, app_setting::AppSettings};
use services::homework::{errors::BotError, poller::HomeworkPoller};
use services::practicum::client::StructPracticumClient;
use services::telegram::bot::StructTelegramBot;
use std::{process, sync::Arc};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    // Инициализация настроек и логирования
    let settings: Arc<AppSettings> = match initialize_application() {
        Ok(settings) => Arc::new(settings),
        Err(err) => {
            // Конфигурация не прочитана, логируем с настройками по умолчанию
            let _ = logger::init_logger("info", "plain", true);
            error!("CRITICAL: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = run(settings).await {
        error!("CRITICAL: {}", err);
        error!("Программа принудительно остановлена.");
        process::exit(1);
    }
}

/// Инициализирует настройки и логирование приложения
fn initialize_application() -> Result<AppSettings, BotError> {
    let environment = AppEnv::new()?;
    let config = AppConfig::new(&environment)?;
    let app_settings = AppSettings {
        app_config: config,
        app_env: environment,
    };

    logger::init_logger(
        &app_settings.app_config.log.level,
        &app_settings.app_config.log.format,
        app_settings.app_env.is_local(),
    )
    .map_err(|e| BotError::Config(format!("failed to initialize logger: {}", e)))?;

    info!("Starting homework status bot...");
    info!("Current environment: {}", app_settings.app_env.env);

    if app_settings.app_env.is_local() {
        info!("Running in local development mode");
        debug!("Configuration details: {:#?}", app_settings);
    } else {
        info!("Running in production mode");
    }

    Ok(app_settings)
}

/// Проверяет токены, создает клиентов и запускает цикл опроса.
/// Возвращает управление только при ошибке запуска.
async fn run(settings: Arc<AppSettings>) -> Result<(), BotError> {
    if !settings.tokens_present() {
        return Err(BotError::ConfigurationMissing(settings.missing_tokens()));
    }

    let app_state = Arc::new(initialize_app_state(settings)?);
    let poller = HomeworkPoller::new(app_state, Utc::now().timestamp());
    poller.start().await;

    Ok(())
}

/// Создает HTTP-клиентов Практикума и Telegram
fn initialize_app_state(settings: Arc<AppSettings>) -> Result<AppState, BotError> {
    info!("Initializing API clients...");

    let practicum_client = StructPracticumClient::new(
        &settings.app_config.practicum,
        &settings.app_env.practicum_token,
    )?;
    let telegram_bot = StructTelegramBot::new(
        &settings.app_config.telegram,
        &settings.app_env.telegram_token,
    )?;

    info!(
        "Clients ready, homework endpoint: {}",
        settings.app_config.practicum.endpoint
    );

    Ok(AppState::new(
        settings,
        Arc::new(practicum_client),
        Arc::new(telegram_bot),
    ))
}
