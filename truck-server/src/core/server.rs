//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::{HttpService, build_router};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with an initialized state (see [`ServerState::initialize`])
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let app = build_router(self.state.clone());
        let http = HttpService::new(self.config.clone());

        tracing::info!(
            environment = %self.config.environment,
            port = self.config.http_port,
            "🚚 Food Truck Server starting"
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        let timeout = std::time::Duration::from_millis(self.config.shutdown_timeout_ms);
        let served = http.start_server(app, shutdown);

        // 收到关闭信号后，等待进行中的请求最多 shutdown_timeout_ms
        let result = tokio::select! {
            r = served => r.map_err(ServerError::Io),
            _ = async {
                let _ = tokio::signal::ctrl_c().await;
                tokio::time::sleep(timeout).await;
            } => {
                tracing::warn!("Graceful shutdown timed out after {:?}", timeout);
                Ok(())
            }
        };

        self.state.agents.shutdown();
        tracing::info!("Shutdown complete");

        result
    }
}
