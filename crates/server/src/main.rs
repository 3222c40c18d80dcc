use anyhow::Result;
use axum::serve;
use clap::Parser;
use server::{
    app::create_app,
    cli::{Cli, Commands, RunArgs},
};
use splitter_core::{config::AppConfig, proxy::ProxyEngine};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the logging system based on the configuration.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// workspace's crates and everything else logs at `warn`.
fn init_logging(config: &AppConfig) {
    let level = config.logging.level.as_str();
    let filter = EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,splitter_core={level},server={level},rpc_splitter={level}"
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format.as_str() == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        // "pretty" and any other format default to pretty logging
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .with_target(false);
        registry.with(fmt_layer).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args).await,
    }
}

async fn run(args: RunArgs) -> Result<()> {
    let config = args
        .load_config()
        .map_err(|e| anyhow::anyhow!("Configuration loading failed: {e}"))?;
    config.validate().map_err(|e| anyhow::anyhow!("Configuration validation failed: {e}"))?;

    init_logging(&config);

    let bind_addr: SocketAddr =
        config.socket_addr().map_err(|e| anyhow::anyhow!("Invalid listen address: {e}"))?;

    let splitter = Arc::new(
        config
            .build_splitter()
            .map_err(|e| anyhow::anyhow!("Splitter initialization failed: {e}"))?,
    );
    info!(
        endpoints = splitter.endpoint_count(),
        total_timeout = ?splitter.total_timeout(),
        graceful_timeout = ?splitter.graceful_timeout(),
        "splitter initialized"
    );

    let proxy_engine = Arc::new(ProxyEngine::new(splitter));
    let app = create_app(proxy_engine, &config.server);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {bind_addr}: {e}"))?;
    info!(address = %bind_addr, cors = config.server.enable_cors, "RPC server listening");

    if let Err(e) = serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!(error = %e, "Server error occurred");
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                () = std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
