use mock_server::{new_db, MockConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let defaults = MockConfig::default();
    let config = MockConfig {
        client_id: std::env::var("MANGOPAY_CLIENT_ID").unwrap_or(defaults.client_id),
        client_secret: std::env::var("MANGOPAY_CLIENT_SECRET").unwrap_or(defaults.client_secret),
        access_token: defaults.access_token,
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, client_id = %config.client_id, "mock Mangopay API listening");
    mock_server::run_with(listener, new_db(config)).await
}
