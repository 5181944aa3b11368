use std::process;

use tracing::error;

use canary::config::CanaryConfig;
use canary::server::Server;
use canary_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CanaryConfig::from_env();
    let server = match Server::bind(&config).await {
        Ok(server) => server,
        Err(err) => {
            error!("startup failed: {err:#}");
            process::exit(1);
        }
    };
    if let Err(err) = server.serve().await {
        error!("server error: {err:#}");
        process::exit(1);
    }
}
