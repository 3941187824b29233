use anyhow::{anyhow, Result};
use sprinova_core::config::Config;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Serve the site. Works without a config file; sprinova.yaml refines the
/// defaults when present.
pub fn run(root: &Path, port: Option<u16>, no_open: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default(root).map_err(|e| anyhow!("{e}"))?;
    for warning in config.validate() {
        tracing::warn!("config: {}", warning.message);
    }

    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Sprinova Digital → http://localhost:{actual_port}");

        tokio::select! {
            res = sprinova_server::serve_on(config, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
