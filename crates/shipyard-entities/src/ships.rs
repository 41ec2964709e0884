//! Entity для таблицы ships.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ships")]
pub struct Model {
    /// Первичный ключ, назначается хранилищем при создании
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Название корабля (непустое, до 50 символов)
    pub name: String,

    /// Планета приписки (непустая, до 50 символов)
    pub planet: String,

    /// Тип корабля
    pub ship_type: Option<ShipType>,

    /// Дата выпуска (в горизонте 2800-01-01 .. 3019-12-31)
    pub prod_date: Date,

    /// Б/у или новый
    pub is_used: bool,

    /// Максимальная скорость, [0.01, 0.99]
    pub speed: f64,

    /// Размер экипажа, [1, 9999]
    pub crew_size: i32,

    /// Рейтинг — вычисляется при каждом сохранении, клиентом не задаётся
    pub rating: f64,
}

/// Тип корабля (хранится строкой).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
    #[sea_orm(string_value = "MILITARY")]
    Military,
    #[sea_orm(string_value = "MERCHANT")]
    Merchant,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
