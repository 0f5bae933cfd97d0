use std::{env, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use models::db::DatabaseConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port and database settings from config.toml, falling back to env vars
fn load_settings() -> Result<(SocketAddr, DatabaseConfig), StartupError> {
    let (host, port, database) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, cfg.database),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            let database = DatabaseConfig::from_env();
            database
                .validate()
                .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            (host, port, database)
        }
    };
    let addr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))?;
    Ok((addr, database))
}

/// Connect, bring the schema up to date and wire the repositories
async fn build_state(database: &DatabaseConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!("database migrations applied");
    Ok(ServerState::with_db(db))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let (addr, database) = load_settings()?;
    let state = build_state(&database).await?;

    let app: Router = routes::build_router(state, build_cors());

    info!(%addr, "starting inventory server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
