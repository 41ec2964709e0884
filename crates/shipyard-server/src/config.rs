//! Конфигурация сервера каталога кораблей.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:3000")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,
}
