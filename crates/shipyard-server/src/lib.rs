//! Ядро сервера каталога кораблей.

pub mod api;
pub mod config;
pub mod error;
pub mod services;


use api::AppState;
use config::ServerConfig;
use sea_orm::{Database, DatabaseConnection};
use shipyard_migration::{Migrator, MigratorTrait};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Запустить сервер каталога.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Состояние приложения
    let state = AppState { db };

    // 4. Маршрутизатор
    let app = api::build_router(state);

    // 5. Graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 6. Запуск сервера
    let addr: SocketAddr = config.listen.parse()?;
    info!("Сервер каталога запущен на {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    info!("Сервер каталога остановлен");
    Ok(())
}
