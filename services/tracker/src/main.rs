use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use shelf_auth_types::identity::JwtSecret;
use shelf_core::tracing::init_tracing;
use shelf_tracker::config::TrackerConfig;
use shelf_tracker::router::build_router;
use shelf_tracker::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = TrackerConfig::from_env();

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
    };

    let router = build_router(state, config.request_timeout_secs);
    let http_addr = format!("0.0.0.0:{}", config.tracker_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("tracker service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
