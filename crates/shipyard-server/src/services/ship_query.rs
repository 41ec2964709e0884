//! Составление запроса: восемь измерений фильтра и пагинация.

use chrono::NaiveDate;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, QueryOrder, QuerySelect, Select, Value};
use serde::Deserialize;
use shipyard_entities::ships::{Column, Entity as ShipEntity, ShipType};

/// Восемь опциональных измерений фильтра. Отсутствующее измерение не
/// попадает в итоговое условие.
#[derive(Debug, Default, Clone)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Собрать единое условие: заданные фрагменты соединяются через AND.
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.name.as_ref().map(|v| Column::Name.contains(v)))
            .add_option(self.planet.as_ref().map(|v| Column::Planet.contains(v)))
            .add_option(self.ship_type.map(|v| Column::ShipType.eq(v)))
            .add_option(range(Column::ProdDate, self.after, self.before))
            .add_option(self.is_used.map(|v| Column::IsUsed.eq(v)))
            .add_option(range(Column::Speed, self.min_speed, self.max_speed))
            .add_option(range(Column::CrewSize, self.min_crew_size, self.max_crew_size))
            .add_option(range(Column::Rating, self.min_rating, self.max_rating))
    }
}

/// Общая политика диапазона: только min → `>=`, только max → `<=`,
/// оба → включительный BETWEEN, ничего → фрагмент отсутствует.
fn range<V>(column: Column, min: Option<V>, max: Option<V>) -> Option<SimpleExpr>
where
    V: Into<Value>,
{
    match (min, max) {
        (Some(min), Some(max)) => Some(column.between(min, max)),
        (Some(min), None) => Some(column.gte(min)),
        (None, Some(max)) => Some(column.lte(max)),
        (None, None) => None,
    }
}

/// Поле сортировки списка.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    CrewSize,
    Rating,
    Date,
}

impl ShipOrder {
    fn column(self) -> Column {
        match self {
            ShipOrder::Id => Column::Id,
            ShipOrder::Speed => Column::Speed,
            ShipOrder::CrewSize => Column::CrewSize,
            ShipOrder::Rating => Column::Rating,
            ShipOrder::Date => Column::ProdDate,
        }
    }
}

/// Директива пагинации: сортировка по возрастанию + offset/limit.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub order: ShipOrder,
    pub page_number: u64,
    pub page_size: u64,
}

impl PageSpec {
    /// Применить сортировку и страницу к запросу.
    /// page_size = 0 даёт пустую страницу, а не ошибку.
    pub fn apply(&self, query: Select<ShipEntity>) -> Select<ShipEntity> {
        query
            .order_by_asc(self.order.column())
            .offset(self.page_number.saturating_mul(self.page_size))
            .limit(self.page_size)
    }
}

/// Преобразовать epoch millis границы фильтра в календарную дату.
/// Непредставимое значение границы игнорируется.
pub fn date_from_millis(millis: i64) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
