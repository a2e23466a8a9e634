use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use common::{ErrorBody, ExplanationResponse};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

use crate::schemas::AppState;

/// Request body for the explanation endpoint.
///
/// `prediction` is optional at the wire level so that a missing or `null`
/// value is reported as a 400 with the usual error body instead of a JSON
/// extractor rejection.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GetExplanationRequest {
    /// Prediction to explain
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub prediction: Option<String>,
}

fn bad_request() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "No prediction provided".to_string(),
        }),
    )
}

/// Ask the configured model to explain a prediction
#[utoipa::path(
    post,
    path = "/api/get_explanation/",
    tag = "explanation",
    request_body = GetExplanationRequest,
    responses(
        (status = 200, description = "Explanation generated", body = ExplanationResponse),
        (status = 400, description = "No prediction provided", body = ErrorBody),
        (status = 500, description = "Model call failed", body = ErrorBody)
    )
)]
#[instrument(skip(state, payload))]
pub async fn get_explanation(
    State(state): State<AppState>,
    payload: Result<Json<GetExplanationRequest>, JsonRejection>,
) -> Result<Json<ExplanationResponse>, (StatusCode, Json<ErrorBody>)> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected explanation request body: {}", rejection);
            return Err(bad_request());
        }
    };

    if let Err(e) = request.validate() {
        debug!("Explanation request failed validation: {}", e);
        return Err(bad_request());
    }
    let Some(prediction) = request.prediction else {
        return Err(bad_request());
    };

    match state.ollama.explain(&prediction).await {
        Ok(explanation) => {
            info!("Explanation generated for prediction of {} characters", prediction.len());
            Ok(Json(ExplanationResponse { explanation }))
        }
        Err(e) => {
            error!("Failed to get explanation from Ollama: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: format!("Failed to get explanation from Ollama: {}", e),
                }),
            ))
        }
    }
}
