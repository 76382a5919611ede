//! Ошибки бота. Текст `Display` уходит пользователю в чат, поэтому он
//! должен быть стабильным между итерациями: по нему работает дедупликация.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    ConfigurationMissing(Vec<&'static str>),

    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Проблемы с подключением к серверу: {0}")]
    Transport(String),

    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Некорректный ответ API: {0}")]
    MalformedResponse(#[from] MalformedResponse),

    #[error("Недокументированный статус работы: {0}")]
    UnrecognizedStatus(String),

    #[error("Сообщение не было отправлено: {0}")]
    Delivery(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("{0} не является словарем")]
    NotAnObject(&'static str),

    #[error("тело ответа не является JSON: {0}")]
    InvalidJson(String),

    #[error("в словаре отсутствует ключ \"{0}\"")]
    MissingKey(&'static str),

    #[error("\"{key}\" должен иметь тип {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}
