#[cfg(test)]
pub mod test_utils {
    use crate::config::{AppConfig, initialize_app_state};
    use crate::router::create_router;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use axum_test::TestServer;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// Unique, empty upload directory under the system temp dir
    pub fn temp_upload_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "watchtower-test-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Start a stand-in for Ollama's `/api/chat` that always answers with
    /// `status` and `body`. Returns its base URL.
    pub async fn spawn_fake_ollama(status: StatusCode, body: serde_json::Value) -> String {
        let app = Router::new().route(
            "/api/chat",
            post(move |Json(request): Json<serde_json::Value>| {
                let body = body.clone();
                async move {
                    // Echo the prompt so tests can see what was forwarded
                    let mut body = body;
                    if let Some(content) = body.pointer_mut("/message/content") {
                        if *content == "{prompt}" {
                            *content = request["messages"][0]["content"].clone();
                        }
                    }
                    (status, Json(body))
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind fake Ollama");
        let addr = listener.local_addr().expect("Fake Ollama has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake Ollama stopped");
        });
        format!("http://{}", addr)
    }

    /// A base URL nothing is listening on
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("Listener has no address");
        drop(listener);
        format!("http://{}", addr)
    }

    /// A running test app. Holds the tracing guard so test logging stays
    /// active until the test ends.
    pub struct TestApp {
        pub server: TestServer,
        pub upload_dir: PathBuf,
        _tracing: tracing::subscriber::DefaultGuard,
    }

    /// Create axum app for testing against the given Ollama URL
    pub async fn setup_test_app(ollama_url: &str) -> TestApp {
        let tracing = init_test_tracing();

        let upload_dir = temp_upload_dir();
        let config = AppConfig {
            ollama_url: ollama_url.to_string(),
            ollama_timeout_secs: 5,
            upload_dir: upload_dir.clone(),
            ..AppConfig::default()
        };
        let state = initialize_app_state(config)
            .await
            .expect("Failed to initialize test state");
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");

        TestApp {
            server,
            upload_dir,
            _tracing: tracing,
        }
    }

    /// One part of a hand-built multipart body. `filename: None` makes a plain text field.
    pub struct Part<'a> {
        pub name: &'a str,
        pub filename: Option<&'a str>,
        pub content: &'a [u8],
    }

    /// Build a multipart body by hand.
    pub fn multipart_parts(boundary: &str, parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            match part.filename {
                Some(filename) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: text/csv\r\n\r\n",
                            part.name, filename
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name).as_bytes(),
                    );
                }
            }
            body.extend_from_slice(part.content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
        body
    }

    /// Single-part multipart body
    pub fn multipart_body(boundary: &str, name: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
        multipart_parts(boundary, &[Part { name, filename, content }])
    }
}
