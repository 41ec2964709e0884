//! Сервис каталога кораблей: создание, чтение, слияние обновлений, удаление, выборки.

use crate::error::AppError;
use crate::services::ship_query::{PageSpec, ShipFilter};
use crate::services::{rating, validation};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use shipyard_entities::ships::{ActiveModel, Entity as ShipEntity, Model, ShipType};

/// Данные корабля из запроса. Каждое поле опционально: отсутствие
/// означает «не задано» при создании и «не менять» при обновлении.
#[derive(Debug, Default, Clone)]
pub struct ShipData {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Дата выпуска в epoch millis
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

/// Создать корабль: обязательные поля, валидация, рейтинг, вставка.
/// Возвращает сохранённый корабль с назначенным id.
pub async fn create_ship(db: &DatabaseConnection, data: ShipData) -> Result<Model, AppError> {
    let name = data.name.ok_or_else(|| validation::missing_field("name"))?;
    let planet = data
        .planet
        .ok_or_else(|| validation::missing_field("planet"))?;
    let speed = data
        .speed
        .ok_or_else(|| validation::missing_field("speed"))?;
    let crew_size = data
        .crew_size
        .ok_or_else(|| validation::missing_field("crewSize"))?;
    let millis = data
        .prod_date
        .ok_or_else(|| validation::missing_field("prodDate"))?;

    validation::validate_text("name", &name)?;
    validation::validate_text("planet", &planet)?;
    validation::validate_speed(speed)?;
    validation::validate_crew_size(crew_size)?;
    let prod_date = validation::parse_prod_date(millis)?;

    let is_used = data.is_used.unwrap_or(false);
    let rating = rating::calculate_rating(speed, is_used, prod_date);

    let model = ActiveModel {
        id: NotSet,
        name: Set(name),
        planet: Set(planet),
        ship_type: Set(data.ship_type),
        prod_date: Set(prod_date),
        is_used: Set(is_used),
        speed: Set(speed),
        crew_size: Set(crew_size),
        rating: Set(rating),
    };
    Ok(model.insert(db).await?)
}

/// Получить корабль по id одним обращением к хранилищу.
pub async fn get_ship(db: &DatabaseConnection, id: i64) -> Result<Model, AppError> {
    ShipEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Корабль {id} не найден")))
}

/// Слить частичное обновление с сохранённым кораблём.
///
/// Заданные поля перезаписывают прежние значения, отсутствующие
/// остаются как были; id не меняется. Дата выпуска разбирается и
/// проверяется на горизонт прямо при слиянии. Результат не сохраняется.
pub fn merge_ship(existing: &Model, data: &ShipData) -> Result<Model, AppError> {
    let mut merged = existing.clone();
    if let Some(name) = &data.name {
        merged.name = name.clone();
    }
    if let Some(planet) = &data.planet {
        merged.planet = planet.clone();
    }
    if let Some(ship_type) = data.ship_type {
        merged.ship_type = Some(ship_type);
    }
    if let Some(millis) = data.prod_date {
        merged.prod_date = validation::parse_prod_date(millis)?;
    }
    if let Some(is_used) = data.is_used {
        merged.is_used = is_used;
    }
    if let Some(speed) = data.speed {
        merged.speed = speed;
    }
    if let Some(crew_size) = data.crew_size {
        merged.crew_size = crew_size;
    }
    Ok(merged)
}

/// Обновить корабль: слияние, повторная валидация, пересчёт рейтинга.
pub async fn update_ship(
    db: &DatabaseConnection,
    id: i64,
    data: ShipData,
) -> Result<Model, AppError> {
    let existing = get_ship(db, id).await?;
    let merged = merge_ship(&existing, &data)?;

    validation::validate_text("name", &merged.name)?;
    validation::validate_text("planet", &merged.planet)?;
    validation::validate_speed(merged.speed)?;
    validation::validate_crew_size(merged.crew_size)?;

    // Рейтинг пересчитывается всегда: любой из трёх его входов мог смениться
    let rating = rating::calculate_rating(merged.speed, merged.is_used, merged.prod_date);

    let mut model: ActiveModel = existing.into();
    model.name = Set(merged.name);
    model.planet = Set(merged.planet);
    model.ship_type = Set(merged.ship_type);
    model.prod_date = Set(merged.prod_date);
    model.is_used = Set(merged.is_used);
    model.speed = Set(merged.speed);
    model.crew_size = Set(merged.crew_size);
    model.rating = Set(rating);
    Ok(model.update(db).await?)
}

/// Удалить корабль по id.
pub async fn delete_ship(db: &DatabaseConnection, id: i64) -> Result<(), AppError> {
    let record = get_ship(db, id).await?;
    let model: ActiveModel = record.into();
    model.delete(db).await?;
    Ok(())
}

/// Страница кораблей по фильтру. Пустой результат — валидный исход.
pub async fn list_ships(
    db: &DatabaseConnection,
    filter: &ShipFilter,
    page: &PageSpec,
) -> Result<Vec<Model>, AppError> {
    let query = ShipEntity::find().filter(filter.condition());
    Ok(page.apply(query).all(db).await?)
}

/// Число кораблей, подходящих под фильтр, без пагинации.
pub async fn count_ships(db: &DatabaseConnection, filter: &ShipFilter) -> Result<u64, AppError> {
    Ok(ShipEntity::find()
        .filter(filter.condition())
        .count(db)
        .await?)
}
