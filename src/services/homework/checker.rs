use crate::services::homework::errors::{BotError, MalformedResponse};
use crate::services::homework::status::HomeworkStatus;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, info};

/// Проверенный ответ API.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkStatuses {
    /// Работы в порядке, заданном API: первая считается последней по времени.
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Проверяет структуру ответа API и возвращает список работ вместе с новой
/// отметкой времени.
pub fn check_response(response: &Value) -> Result<HomeworkStatuses, BotError> {
    info!("Checking API response structure");

    let object = response
        .as_object()
        .ok_or(MalformedResponse::NotAnObject("response"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(MalformedResponse::MissingKey("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(MalformedResponse::MissingKey("current_date"))?;

    let homeworks = homeworks.as_array().ok_or(MalformedResponse::WrongType {
        key: "homeworks",
        expected: "list",
    })?;
    let current_date = current_date.as_i64().ok_or(MalformedResponse::WrongType {
        key: "current_date",
        expected: "int",
    })?;

    debug!(
        "Response is valid: {} homeworks, current_date={}",
        homeworks.len(),
        current_date
    );

    Ok(HomeworkStatuses {
        homeworks: homeworks.clone(),
        current_date,
    })
}

/// Формирует текст уведомления по записи о работе.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let record = homework
        .as_object()
        .ok_or(MalformedResponse::NotAnObject("homework"))?;

    let homework_name = record
        .get("homework_name")
        .ok_or(MalformedResponse::MissingKey("homework_name"))?
        .as_str()
        .ok_or(MalformedResponse::WrongType {
            key: "homework_name",
            expected: "str",
        })?;
    let status = record
        .get("status")
        .ok_or(MalformedResponse::MissingKey("status"))?
        .as_str()
        .ok_or(MalformedResponse::WrongType {
            key: "status",
            expected: "str",
        })?;

    let status = HomeworkStatus::from_str(status)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}
