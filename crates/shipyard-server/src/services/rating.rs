//! Вычисление рейтинга корабля.

use chrono::{Datelike, NaiveDate};

/// Последний год допустимого горизонта даты выпуска.
const HORIZON_YEAR: i32 = 3019;

/// Рейтинг = 80 · speed · k / (3019 − год выпуска + 1), округлённый до
/// двух знаков; k = 0.5 для б/у корабля, иначе 1.0.
///
/// Валидатор не пропускает даты позже 3019 года, знаменатель всегда ≥ 1.
pub fn calculate_rating(speed: f64, is_used: bool, prod_date: NaiveDate) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let years_left = (HORIZON_YEAR - prod_date.year() + 1) as f64;
    let raw = 80.0 * speed * k / years_left;
    (raw * 100.0).round() / 100.0
}
