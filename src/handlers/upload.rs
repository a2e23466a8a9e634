use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use common::{ApiResponse, ErrorResponse, UPLOAD_FIELD, UploadReceipt};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

use crate::schemas::AppState;

const FALLBACK_FILE_NAME: &str = "upload.csv";
const MAX_NAME_ATTEMPTS: usize = 100;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file provided")]
    NoFile,
    #[error("Invalid multipart body: {0}")]
    Multipart(String),
    #[error("Failed to store file: {0}")]
    Storage(#[from] std::io::Error),
}

impl UploadError {
    fn into_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, code) = match &self {
            UploadError::NoFile => (StatusCode::BAD_REQUEST, "NO_FILE"),
            UploadError::Multipart(_) => (StatusCode::BAD_REQUEST, "INVALID_MULTIPART"),
            UploadError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: code.to_string(),
                success: false,
            }),
        )
    }
}

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// CSV file to upload
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Keep `[A-Za-z0-9._-]`, replace everything else, and never return an empty name.
pub fn sanitize_file_name(name: &str) -> String {
    // Drop any client-side directory components first
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

/// Count non-empty lines after the header line.
pub fn count_rows(content: &[u8]) -> usize {
    String::from_utf8_lossy(content)
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Write `content` to `{prefix}_{name}` without replacing an existing file.
/// Collisions get `{prefix}-{n}_{name}`. Returns the name written.
pub async fn write_unique(dir: &Path, prefix: &str, name: &str, content: &[u8]) -> std::io::Result<String> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = if attempt == 0 {
            format!("{}_{}", prefix, name)
        } else {
            format!("{}-{}_{}", prefix, attempt, name)
        };
        match OpenOptions::new().write(true).create_new(true).open(dir.join(&candidate)).await {
            Ok(mut file) => {
                file.write_all(content).await?;
                file.flush().await?;
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} already exists, trying another name", candidate);
            }
            Err(e) => return Err(e),
        }
    }
    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free name for {} after {} attempts", name, MAX_NAME_ATTEMPTS),
    ))
}

async fn store_upload(upload_dir: &Path, mut multipart: Multipart) -> Result<UploadReceipt, UploadError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }
        // First file part wins; plain text parts named `file` carry no file
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            debug!("Ignoring `{}` part without a file name", UPLOAD_FIELD);
            continue;
        };
        if upload.is_some() {
            debug!("Ignoring extra `{}` part {}", UPLOAD_FIELD, file_name);
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?;
        upload = Some((file_name, bytes));
    }

    let (file_name, bytes) = match upload {
        Some((file_name, bytes)) if !bytes.is_empty() => (file_name, bytes),
        _ => return Err(UploadError::NoFile),
    };

    let prefix = chrono::Utc::now().format("%Y%m%d%H%M%S%3f").to_string();
    let stored_as = write_unique(upload_dir, &prefix, &sanitize_file_name(&file_name), &bytes).await?;

    Ok(UploadReceipt {
        file_name,
        stored_as,
        size_bytes: bytes.len() as u64,
        rows: count_rows(&bytes),
    })
}

/// Receive a data file as multipart form data
#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = ApiResponse<UploadReceipt>),
        (status = 400, description = "No file in the form", body = ErrorResponse),
        (status = 500, description = "File could not be stored", body = ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadReceipt>>, (StatusCode, Json<ErrorResponse>)> {
    match store_upload(&state.config.upload_dir, multipart).await {
        Ok(receipt) => {
            info!(
                "Stored upload {} as {} ({} bytes, {} rows)",
                receipt.file_name, receipt.stored_as, receipt.size_bytes, receipt.rows
            );
            Ok(Json(ApiResponse {
                data: receipt,
                message: "File uploaded successfully".to_string(),
                success: true,
            }))
        }
        Err(UploadError::Storage(e)) => {
            error!("Failed to store upload: {}", e);
            Err(UploadError::Storage(e).into_response())
        }
        Err(e) => {
            warn!("Rejected upload: {}", e);
            Err(e.into_response())
        }
    }
}
