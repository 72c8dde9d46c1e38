use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, firebase_config::FirebaseConfig};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product catalog REST API entry point
///
/// Layout:
/// - config/: environment-driven configuration (server, CORS, database, Firebase)
/// - setup/: dependency injection and server setup
/// - api/: endpoints, DTOs, error mapping and identity resolution
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    let firebase = FirebaseConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, firebase);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
