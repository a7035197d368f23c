use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dreamscape_export::pdf::{ChromiumRenderer, ReportRenderer};
use dreamscape_server::config::ServerConfig;
use dreamscape_server::service::ReportService;
use dreamscape_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let model = config.model.connect().await?;

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| eyre::eyre!("failed to create {}: {e}", config.output_dir.display()))?;

    let renderer = ReportRenderer::new(
        Arc::new(ChromiumRenderer::new(&config.chromium_path)),
        &config.banner_path,
        config.page_format,
    );
    let service = ReportService::new(
        model,
        renderer,
        &config.templates_dir,
        &config.output_dir,
    );

    let app = dreamscape_server::router(AppState {
        service: Arc::new(service),
    });

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
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
