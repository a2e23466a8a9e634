use common::{ApiResponse, ErrorBody, ErrorResponse, ExplanationRequest, ExplanationResponse, UploadReceipt};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::AppConfig;
use crate::ollama::OllamaClient;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
    /// Client used to generate explanations
    pub ollama: Arc<OllamaClient>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Model used for explanations
    pub ollama_model: String,
    /// Directory uploads are written to
    pub upload_dir: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::explanation::get_explanation,
        crate::handlers::upload::upload_file,
    ),
    components(
        schemas(
            ApiResponse<UploadReceipt>,
            ErrorResponse,
            ErrorBody,
            HealthResponse,
            ExplanationRequest,
            ExplanationResponse,
            UploadReceipt,
            crate::handlers::upload::UploadForm,
            crate::handlers::explanation::GetExplanationRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "explanation", description = "Prediction explanation endpoints"),
        (name = "upload", description = "Data upload endpoints"),
    ),
    info(
        title = "Watchtower API",
        description = "Backend for the Watchtower dashboard: prediction explanations and CSV uploads",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
