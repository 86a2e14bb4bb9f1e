mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();
    let addr = config.listen_addr();
    let state = state::AppState::new(config);

    // Dashboards are optional: without a Leptos site configuration the API still serves.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos site not configured, serving API only");
            routes::app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "agrichain listening");
    axum::serve(listener, app).await.expect("server failed");
}
