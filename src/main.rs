use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_manager::config::Config;
use task_manager::state::AppState;
use task_manager::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,task_manager=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = db::connect_with_fallback(config.database_url.as_deref()).await?;

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
    };

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!("server listening at http://{}", config.addr());

    axum::serve(listener, app).await?;

    Ok(())
}
