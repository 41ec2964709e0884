//! Сервисы каталога: валидация, рейтинг, составление запросов, CRUD.

pub mod rating;
pub mod ship_query;
pub mod ship_service;
pub mod validation;
