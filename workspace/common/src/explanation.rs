use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of an explanation request: a single opaque prediction value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExplanationRequest {
    pub prediction: String,
}

/// Body returned by an explanation endpoint on success.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExplanationResponse {
    pub explanation: String,
}

/// Body returned by the explanation endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
