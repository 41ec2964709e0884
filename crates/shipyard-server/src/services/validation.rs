//! Проверка инвариантов корабля перед сохранением.

use crate::error::AppError;
use chrono::{Datelike, NaiveDate};

/// Допустимый горизонт даты выпуска: [2800-01-01, 3019-12-31].
/// Обе границы — целые годы, поэтому проверка идёт по календарному году.
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = 3019;

const MAX_TEXT_LEN: usize = 50;

/// Проверить текстовое поле: непустое, не длиннее 50 символов.
pub fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!(
            "Поле {field} не может быть пустым"
        )));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "Поле {field} длиннее {MAX_TEXT_LEN} символов"
        )));
    }
    Ok(())
}

/// Проверить скорость: [0.01, 0.99].
pub fn validate_speed(speed: f64) -> Result<(), AppError> {
    if !(0.01..=0.99).contains(&speed) {
        return Err(AppError::Validation(format!(
            "speed должен лежать в [0.01, 0.99], получено {speed}"
        )));
    }
    Ok(())
}

/// Проверить размер экипажа: [1, 9999].
pub fn validate_crew_size(crew_size: i32) -> Result<(), AppError> {
    if !(1..=9999).contains(&crew_size) {
        return Err(AppError::Validation(format!(
            "crewSize должен лежать в [1, 9999], получено {crew_size}"
        )));
    }
    Ok(())
}

/// Разобрать дату выпуска из epoch millis и проверить горизонт.
///
/// Millis должны быть неотрицательными, а календарный год даты — в
/// диапазоне 2800..=3019. Сравнение по календарному году, не по
/// разности millis.
pub fn parse_prod_date(millis: i64) -> Result<NaiveDate, AppError> {
    if millis < 0 {
        return Err(invalid_prod_date(millis));
    }
    let date = chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| invalid_prod_date(millis))?;
    if !(MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&date.year()) {
        return Err(invalid_prod_date(millis));
    }
    Ok(date)
}

fn invalid_prod_date(millis: i64) -> AppError {
    AppError::Validation(format!(
        "prodDate вне допустимого диапазона [2800-01-01, 3019-12-31]: {millis}"
    ))
}

/// Ошибка отсутствующего обязательного поля.
pub fn missing_field(field: &str) -> AppError {
    AppError::Validation(format!("Обязательное поле {field} не задано"))
}
