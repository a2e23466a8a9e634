use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::{AppConfig, initialize_app_state};
use crate::router::create_router;

pub async fn serve(config: AppConfig) -> Result<()> {
    debug!("Configuration: {:?}", config);
    let bind_address = config.bind_address.clone();

    let state = initialize_app_state(config)
        .await
        .context("Failed to initialize application state")?;
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_address))?;

    info!("Watchtower API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    run(listener, create_router(state), shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` resolves, then let in-flight
/// requests finish.
pub async fn run<S>(listener: TcpListener, app: Router, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;
    info!("Server shutdown gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::test_utils::test_utils::{temp_upload_dir, unreachable_url};
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_run_stops_on_shutdown_signal() {
        let config = AppConfig {
            ollama_url: unreachable_url().await,
            upload_dir: temp_upload_dir(),
            ..AppConfig::default()
        };
        let state = initialize_app_state(config).await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(run(listener, create_router(state), async {
            let _ = stopped.await;
        }));

        let health = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
        assert!(health.status().is_success());

        stop.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
