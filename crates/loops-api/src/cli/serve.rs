//! `loops serve` -- run the HTTP relay.

use std::path::PathBuf;

use console::style;

use loops_types::config::AppConfig;

use crate::http::router::build_router;
use crate::state::ConcreteAppState;

/// Command-line overrides for the `[server]` section.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub web_dir: Option<PathBuf>,
}

impl ServeOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(web_dir) = self.web_dir {
            config.server.web_dir = Some(web_dir);
        }
    }
}

pub async fn run_server(mut config: AppConfig, overrides: ServeOverrides, quiet: bool) -> anyhow::Result<()> {
    overrides.apply(&mut config);

    let state = ConcreteAppState::init(&config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, brand = %config.brand.name, "relay listening");

    if !quiet {
        println!(
            "  {} {} chat relay listening on {}",
            style("⚡").bold(),
            style(&config.brand.name).bold(),
            style(format!("http://{addr}")).cyan()
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }

    let router = build_router(state, config.server.web_dir.as_deref());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// A signal handler that fails to install never fires; the other one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
