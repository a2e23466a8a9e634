use crate::handlers::{
    explanation::get_explanation,
    health::health_check,
    upload::upload_file,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction explanation
        .route("/api/get_explanation/", post(get_explanation))
        // Data upload
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(config.upload_max_bytes)),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Built dashboard, when configured
    if let Some(static_dir) = &config.static_dir {
        tracing::info!("Serving dashboard from {}", static_dir.display());
        router = router.fallback_service(
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        );
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
