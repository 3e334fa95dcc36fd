use crate::core::{Config, ServerState};
use crate::middleware::logging_middleware;
use axum::{Router, middleware};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::status_checks::router())
        // Business APIs
        .merge(crate::api::food_truck_info::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::locations::router())
        // Agent gateway
        .merge(crate::api::agents::router())
}

/// Router with state and the tower-http layers applied
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(logging_middleware))
}

#[derive(Clone, Debug)]
pub struct HttpService {
    config: Config,
}

impl HttpService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Serve `app` until `shutdown_signal` resolves
    pub async fn start_server<F>(&self, app: Router, shutdown_signal: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("🚀 Starting HTTP server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}
