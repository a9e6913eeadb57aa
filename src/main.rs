use tracing_subscriber::EnvFilter;

use ytdl_gateway::{
    config::Config,
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ytdl_gateway=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize application state
    let state = AppState::from_config(&config)?;

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
