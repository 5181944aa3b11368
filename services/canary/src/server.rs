use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::CanaryConfig;
use crate::router::build_router;
use crate::state::AppState;

/// A bound, not-yet-serving listener. Binding happens before any request is
/// accepted, so a process that got past [`Server::bind`] is ready to answer.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: axum::Router,
}

impl Server {
    /// Reserve the configured port on all interfaces. A port already held by
    /// another process is a fatal error; there is no retry.
    pub async fn bind(config: &CanaryConfig) -> anyhow::Result<Self> {
        let addr = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let local_addr = listener
            .local_addr()
            .context("failed to read bound address")?;
        let router = build_router(AppState::from_config(config));
        Ok(Self {
            listener,
            local_addr,
            router,
        })
    }

    /// The address actually bound (port 0 resolves to the OS-picked port).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until externally terminated.
    pub async fn serve(self) -> anyhow::Result<()> {
        info!("canary listening on {}", self.local_addr);
        axum::serve(self.listener, self.router)
            .await
            .context("server error")
    }
}
