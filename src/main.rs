use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use yatube::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let app = router::router()
        .with_state(AppState::new(db, config.app_url.clone()))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
