#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{
        multipart_body, multipart_parts, setup_test_app, spawn_fake_ollama, unreachable_url, Part,
    };
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use common::{ApiResponse, ErrorBody, ErrorResponse, ExplanationResponse, UploadReceipt};
    use serde_json::json;

    const BOUNDARY: &str = "watchtower-test-boundary";

    fn ollama_reply(content: &str) -> serde_json::Value {
        json!({
            "model": "llama2",
            "created_at": "2024-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": content},
            "done": true
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app(&unreachable_url().await).await;

        let response = app.server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ollama_model"], "llama2");
        assert_eq!(body["upload_dir"], app.upload_dir.display().to_string());
    }

    #[tokio::test]
    async fn test_get_explanation_returns_model_reply() {
        let ollama = spawn_fake_ollama(StatusCode::OK, ollama_reply("{prompt}")).await;
        let app = setup_test_app(&ollama).await;

        let response = app
            .server
            .post("/api/get_explanation/")
            .json(&json!({"prediction": "Sample prediction"}))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ExplanationResponse = response.json();
        // The fake echoes the forwarded user message
        assert_eq!(body.explanation, "Sample prediction");
    }

    #[tokio::test]
    async fn test_get_explanation_without_prediction() {
        let ollama = spawn_fake_ollama(StatusCode::OK, ollama_reply("unused")).await;
        let app = setup_test_app(&ollama).await;

        for payload in [json!({}), json!({"prediction": null}), json!({"prediction": ""})] {
            let response = app.server.post("/api/get_explanation/").json(&payload).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body: ErrorBody = response.json();
            assert_eq!(body.error, "No prediction provided");
        }
    }

    #[tokio::test]
    async fn test_get_explanation_with_malformed_body() {
        let ollama = spawn_fake_ollama(StatusCode::OK, ollama_reply("unused")).await;
        let app = setup_test_app(&ollama).await;

        let response = app
            .server
            .post("/api/get_explanation/")
            .bytes(Bytes::from_static(b"{not json"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "No prediction provided");
    }

    #[tokio::test]
    async fn test_get_explanation_when_model_errors() {
        let ollama = spawn_fake_ollama(
            StatusCode::NOT_FOUND,
            json!({"error": "model 'llama2' not found"}),
        )
        .await;
        let app = setup_test_app(&ollama).await;

        let response = app
            .server
            .post("/api/get_explanation/")
            .json(&json!({"prediction": "Sample prediction"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert!(body.error.starts_with("Failed to get explanation from Ollama:"));
        assert!(body.error.contains("404"));
    }

    #[tokio::test]
    async fn test_get_explanation_when_model_unreachable() {
        let app = setup_test_app(&unreachable_url().await).await;

        let response = app
            .server
            .post("/api/get_explanation/")
            .json(&json!({"prediction": "Sample prediction"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert!(body.error.starts_with("Failed to get explanation from Ollama:"));
    }

    #[tokio::test]
    async fn test_get_explanation_with_unexpected_reply() {
        let ollama = spawn_fake_ollama(StatusCode::OK, json!({"done": true})).await;
        let app = setup_test_app(&ollama).await;

        let response = app
            .server
            .post("/api/get_explanation/")
            .json(&json!({"prediction": "Sample prediction"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_upload_csv_file() {
        let app = setup_test_app(&unreachable_url().await).await;

        let csv = b"month,value\nJanuary,65\nFebruary,59\nMarch,80\n";
        let response = app
            .server
            .post("/upload")
            .bytes(Bytes::from(multipart_body(BOUNDARY, "file", Some("metrics.csv"), csv)))
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<UploadReceipt> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "File uploaded successfully");
        assert_eq!(body.data.file_name, "metrics.csv");
        assert!(body.data.stored_as.ends_with("_metrics.csv"));
        assert_eq!(body.data.size_bytes, csv.len() as u64);
        assert_eq!(body.data.rows, 3);

        let stored = std::fs::read(app.upload_dir.join(&body.data.stored_as)).unwrap();
        assert_eq!(stored, csv);
    }

    #[tokio::test]
    async fn test_upload_with_empty_file_field() {
        let app = setup_test_app(&unreachable_url().await).await;

        // What the dashboard sends when no file was picked
        let response = app
            .server
            .post("/upload")
            .bytes(Bytes::from(multipart_body(BOUNDARY, "file", None, b"")))
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "NO_FILE");
        assert_eq!(body.error, "No file provided");
        assert_eq!(std::fs::read_dir(&app.upload_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let app = setup_test_app(&unreachable_url().await).await;

        let response = app
            .server
            .post("/upload")
            .bytes(Bytes::from(multipart_body(BOUNDARY, "other", Some("x.csv"), b"a,b\n1,2\n")))
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NO_FILE");
    }

    #[tokio::test]
    async fn test_upload_sanitizes_stored_name() {
        let app = setup_test_app(&unreachable_url().await).await;

        let response = app
            .server
            .post("/upload")
            .bytes(Bytes::from(multipart_body(BOUNDARY, "file", Some("../q3 report.csv"), b"h\n1\n")))
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<UploadReceipt> = response.json();
        assert!(body.data.stored_as.ends_with("_q3_report.csv"));
        assert!(app.upload_dir.join(&body.data.stored_as).exists());
    }

    #[tokio::test]
    async fn test_upload_keeps_first_file_part() {
        let app = setup_test_app(&unreachable_url().await).await;

        let body = multipart_parts(
            BOUNDARY,
            &[
                Part { name: "file", filename: Some("metrics.csv"), content: b"h\n1\n" },
                Part { name: "file", filename: None, content: b"" },
            ],
        );
        let response = app
            .server
            .post("/upload")
            .bytes(Bytes::from(body))
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<UploadReceipt> = response.json();
        assert_eq!(body.data.file_name, "metrics.csv");
        assert_eq!(body.data.rows, 1);
        let stored = std::fs::read(app.upload_dir.join(&body.data.stored_as)).unwrap();
        assert_eq!(stored, b"h\n1\n");
    }

    #[tokio::test]
    async fn test_tracing_stays_active_for_test_app() {
        let app = setup_test_app(&unreachable_url().await).await;

        assert!(tracing::enabled!(tracing::Level::ERROR));
        app.server.get("/health").await.assert_status(StatusCode::OK);
        assert!(tracing::enabled!(tracing::Level::ERROR));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_endpoints() {
        let app = setup_test_app(&unreachable_url().await).await;

        let response = app.server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"].get("/api/get_explanation/").is_some());
        assert!(doc["paths"].get("/upload").is_some());
        assert!(doc["paths"].get("/health").is_some());
    }
}
