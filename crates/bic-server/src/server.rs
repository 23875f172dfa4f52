use tokio::net::TcpListener;

use bic_registry::Registry;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router_with_body_limit;

/// BIC registry HTTP server.
pub struct RegistryServer {
    config: ServerConfig,
    registry: Registry,
}

impl RegistryServer {
    pub fn new(config: ServerConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router_with_body_limit(self.registry.clone(), self.config.max_body_bytes)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("BIC registry server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
