//! HTTP server core implementation

use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::server::handlers::{json_error_handler, not_found};
use crate::server::routes;
use crate::server::state::AppState;
use crate::server::utils::format_bind_error;
use crate::utils::error::{GatewayError, Result};

/// Largest accepted request body
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Value of the `Server` response header
pub const SERVER_HEADER: &str = "llm-gateway";

/// Build the actix application around shared state
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(MAX_BODY_SIZE)
        .content_type_required(false)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
        .configure(routes::configure_routes)
        .default_service(web::to(not_found))
}

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server with providers built from the configuration
    pub fn new(config: &Config) -> Self {
        Self::with_state(AppState::from_config(config.clone()))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!(
            address = %bind_addr,
            providers = ?self.state.registry.list_names(),
            timeout_secs = self.config.request_timeout,
            "Starting HTTP server"
        );

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
