//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, health, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::inbound::http::validation::{json_config, path_config};
use crate::outbound::persistence::DieselUserRepository;

/// Shared state handed to each worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Readiness and liveness flags.
    pub health_state: web::Data<HealthState>,
    /// Driving ports used by the account handlers.
    pub http_state: web::Data<HttpState>,
}

/// Any-origin CORS policy, including preflight handling.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// Assemble the application: middleware, extractor config, and routes.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .wrap(cors())
        .service(web::scope("/api/users").configure(users::configure))
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        connector,
    } = config;
    let repository = Arc::new(DieselUserRepository::new(connector));
    let http_state = web::Data::new(HttpState::from_repository(repository));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for server bootstrap and readiness signalling.

    use super::*;
    use crate::outbound::persistence::{DatabaseConfig, SqliteConnector};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn health_state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new())
    }

    #[fixture]
    fn database_dir() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    fn server_config(dir: &TempDir) -> ServerConfig {
        let connector = SqliteConnector::new(DatabaseConfig::new(dir.path().join("users.db")));
        let bind_addr = "127.0.0.1:0".parse().expect("loopback address");
        ServerConfig::new(bind_addr, connector)
    }

    #[rstest]
    #[actix_web::test]
    async fn create_server_marks_ready(health_state: web::Data<HealthState>, database_dir: TempDir) {
        assert!(!health_state.is_ready(), "state should start unready");

        let _server = create_server(health_state.clone(), server_config(&database_dir))
            .expect("server should bind an ephemeral port");

        assert!(
            health_state.is_ready(),
            "server creation should mark readiness"
        );
    }

    #[rstest]
    fn server_config_exposes_bind_addr(database_dir: TempDir) {
        let config = server_config(&database_dir);
        assert_eq!(config.bind_addr().ip().to_string(), "127.0.0.1");
        assert!(config.connector().config().path().ends_with("users.db"));
    }
}
