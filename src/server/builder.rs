//! ServerBuilder for fluent API to build the preview server

use super::handlers::AppState;
use super::router::build_routes;
use crate::config::CardsConfig;
use crate::intake::OrderSource;
use crate::render::DocumentRenderer;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the report card HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(CardsConfig::from_yaml_file("cards.yaml")?)
///     .with_order_source(SampleOrderSource)
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: CardsConfig,
    order_source: Option<Arc<dyn OrderSource>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: CardsConfig::default(),
            order_source: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: CardsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the source used by `GET /api/orders/{order_id}/cards`
    ///
    /// Without one that route answers with a "not configured" load error.
    pub fn with_order_source(mut self, source: impl OrderSource + 'static) -> Self {
        self.order_source = Some(Arc::new(source));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    pub fn config(&self) -> &CardsConfig {
        &self.config
    }

    /// Build the router
    pub fn build(self) -> Result<Router> {
        self.config.validate()?;

        let state = AppState {
            renderer: Arc::new(DocumentRenderer::new(self.config.render.clone())),
            order_source: self.order_source,
        };

        let mut app = build_routes(state, self.config.server.max_body_bytes);
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Serve on the configured bind address
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config.server.bind_address.clone();
        self.serve(&addr).await
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
