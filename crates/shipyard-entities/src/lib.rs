//! Модели данных реестра кораблей.

pub mod ships;
