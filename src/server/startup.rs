use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database_url.as_str());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the HTTP listener on all interfaces at the configured port
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    Ok(listener)
}
