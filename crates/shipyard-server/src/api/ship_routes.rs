//! Маршруты каталога кораблей: список, счётчик, создание, чтение, обновление, удаление.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::ship_query::{date_from_millis, PageSpec, ShipFilter, ShipOrder};
use crate::services::ship_service::{self, ShipData};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shipyard_entities::ships::{Model, ShipType};

// ── Типы запросов/ответов ────────────────────────────────────────────────────

/// Тело создания или частичного обновления: каждое поле опционально.
/// При обновлении отсутствующее поле оставляет прежнее значение.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequest {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Дата выпуска в epoch millis
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl ShipRequest {
    fn into_data(self) -> ShipData {
        ShipData {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
        }
    }
}

/// Корабль в ответе; prod_date отдаётся в epoch millis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipResponse {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: Option<ShipType>,
    pub prod_date: i64,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl From<Model> for ShipResponse {
    fn from(ship: Model) -> Self {
        let millis = ship
            .prod_date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis();
        ShipResponse {
            id: ship.id,
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type,
            prod_date: millis,
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }
}

/// Параметры выборки: восемь измерений фильтра + сортировка и страница.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub is_used: Option<bool>,
    /// Нижняя граница даты выпуска, epoch millis
    pub after: Option<i64>,
    /// Верхняя граница даты выпуска, epoch millis
    pub before: Option<i64>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub order: ShipOrder,
    pub page_number: u64,
    pub page_size: u64,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            name: None,
            planet: None,
            ship_type: None,
            is_used: None,
            after: None,
            before: None,
            min_speed: None,
            max_speed: None,
            min_crew_size: None,
            max_crew_size: None,
            min_rating: None,
            max_rating: None,
            order: ShipOrder::default(),
            page_number: 0,
            page_size: 3,
        }
    }
}

impl ListParams {
    fn filter(&self) -> ShipFilter {
        ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            after: self.after.and_then(date_from_millis),
            before: self.before.and_then(date_from_millis),
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }

    fn page(&self) -> PageSpec {
        PageSpec {
            order: self.order,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ships", get(list_ships).post(create_ship))
        .route("/ships/count", get(count_ships))
        .route(
            "/ships/{id}",
            get(get_ship).post(update_ship).delete(delete_ship),
        )
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /api/v1/ships — список с фильтрами и пагинацией.
/// Пустая страница — 204 No Content, не ошибка.
async fn list_ships(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let ships = ship_service::list_ships(&state.db, &params.filter(), &params.page()).await?;
    if ships.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    let body: Vec<ShipResponse> = ships.into_iter().map(ShipResponse::from).collect();
    Ok(Json(body).into_response())
}

/// GET /api/v1/ships/count — число кораблей, подходящих под фильтры.
async fn count_ships(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<u64>, AppError> {
    let count = ship_service::count_ships(&state.db, &params.filter()).await?;
    Ok(Json(count))
}

/// POST /api/v1/ships — создать корабль.
async fn create_ship(
    State(state): State<AppState>,
    Json(req): Json<ShipRequest>,
) -> Result<Json<ShipResponse>, AppError> {
    let ship = ship_service::create_ship(&state.db, req.into_data()).await?;
    tracing::info!("Корабль создан: {} (id {})", ship.name, ship.id);
    Ok(Json(ship.into()))
}

/// GET /api/v1/ships/{id} — получить корабль.
async fn get_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ShipResponse>, AppError> {
    check_id(id)?;
    let ship = ship_service::get_ship(&state.db, id).await?;
    Ok(Json(ship.into()))
}

/// POST /api/v1/ships/{id} — частичное обновление.
async fn update_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ShipRequest>,
) -> Result<Json<ShipResponse>, AppError> {
    check_id(id)?;
    let ship = ship_service::update_ship(&state.db, id, req.into_data()).await?;
    tracing::info!("Корабль обновлён: id {id}");
    Ok(Json(ship.into()))
}

/// DELETE /api/v1/ships/{id} — удалить корабль.
async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_id(id)?;
    ship_service::delete_ship(&state.db, id).await?;
    tracing::info!("Корабль удалён: id {id}");
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// id должен быть положительным.
fn check_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::InvalidArgument(format!(
            "id должен быть положительным: {id}"
        )));
    }
    Ok(())
}
