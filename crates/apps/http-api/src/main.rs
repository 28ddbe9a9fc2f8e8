use http_api::config::AppConfig;
use http_api::lifecycle::{App, ShutdownOutcome};
use http_api::telemetry::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.server.env_type);

    info!(env_type = %config.server.env_type, "starting trade service");

    let app = App::start(&config).await.inspect_err(|err| {
        error!(error = %err, "startup failed");
    })?;
    info!(addr = %app.local_addr(), "accepting requests");

    shutdown_signal().await;

    match app.stop(config.server.shutdown_timeout).await {
        ShutdownOutcome::Graceful => info!("shutdown complete"),
        ShutdownOutcome::Forced => info!("shutdown complete after timeout"),
    }

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
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

    info!("received interrupt signal");
}
