/**
 * Binfolio Server Entry Point
 *
 * This is the main entry point for the binfolio backend server. It loads
 * the environment, initializes tracing, and starts the Axum HTTP server.
 */

use binfolio::backend::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    // All configuration is read once, here; the store client and the gate
    // receive explicit values rather than reading the environment themselves.
    let config = AppConfig::from_env()?;
    let port = config.port;

    let app = create_app(config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    eprintln!("[STARTUP] Starting server on {}", addr);
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("[STARTUP] Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
