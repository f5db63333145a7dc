use holocron::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    let app = router::routes().with_state(AppState { db });

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
