//! Service entry-point: loads settings, prepares storage, and runs the HTTP
//! server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{SqliteConnector, ensure_schema};
use user_service::server::{ServerConfig, create_server};
use user_service::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let connector = SqliteConnector::new(settings.database_config());

    ensure_schema(&connector)
        .await
        .map_err(std::io::Error::other)?;
    info!(
        database = %settings.database_path().display(),
        "storage ready"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, connector))?;
    server.await
}
