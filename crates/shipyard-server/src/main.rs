//! Точка входа сервера каталога кораблей.

use clap::Parser;
use shipyard_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shipyard-server",
    about = "Shipyard Server — каталог космических кораблей"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./shipyard.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
    };

    shipyard_server::run(config).await
}
