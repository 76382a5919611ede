use chrono::{DateTime, Utc};

// Отметка времени API в удобочитаемом виде для логов
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("invalid timestamp {}", timestamp),
    }
}
