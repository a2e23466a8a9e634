use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::ollama::OllamaClient;
use crate::schemas::AppState;

/// Server configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Bind address for the web server
    ///
    /// Format: IP:PORT (e.g., 0.0.0.0:8000, 127.0.0.1:8080)
    #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Base URL of the Ollama server used to generate explanations
    #[arg(long, env = "OLLAMA_URL", default_value = "http://127.0.0.1:11434")]
    pub ollama_url: String,

    /// Ollama model name
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama2")]
    pub ollama_model: String,

    /// Timeout for a single Ollama chat call, in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 120)]
    pub ollama_timeout_secs: u64,

    /// Directory uploaded files are written to (created if missing)
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Maximum accepted request body size for uploads, in bytes
    #[arg(long, env = "UPLOAD_MAX_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub upload_max_bytes: usize,

    /// Overall request timeout, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 150)]
    pub request_timeout_secs: u64,

    /// Directory holding the built dashboard (index.html, wasm bundle)
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            ollama_url: "http://127.0.0.1:11434".to_string(),
            ollama_model: "llama2".to_string(),
            ollama_timeout_secs: 120,
            upload_dir: PathBuf::from("uploads"),
            upload_max_bytes: 10 * 1024 * 1024,
            request_timeout_secs: 150,
            static_dir: None,
        }
    }
}

/// Initialize application state from configuration
pub async fn initialize_app_state(config: AppConfig) -> Result<AppState> {
    tracing::info!("Using upload directory: {}", config.upload_dir.display());
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("creating upload directory {}", config.upload_dir.display()))?;

    tracing::info!(
        "Explanations served by Ollama at {} (model {})",
        config.ollama_url,
        config.ollama_model
    );
    let ollama = OllamaClient::new(
        &config.ollama_url,
        &config.ollama_model,
        Duration::from_secs(config.ollama_timeout_secs),
    )?;

    Ok(AppState {
        config: Arc::new(config),
        ollama: Arc::new(ollama),
    })
}
