mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let options = config::leptos_options().expect("leptos configuration required");

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr(), "secureauth listening");
    axum::serve(listener, app).await.expect("server failed");
}
