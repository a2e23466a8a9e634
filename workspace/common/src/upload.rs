use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// What the server stored for an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadReceipt {
    /// File name as sent by the client
    pub file_name: String,
    /// Name of the file written to the upload directory
    pub stored_as: String,
    /// Number of bytes written
    pub size_bytes: u64,
    /// Non-empty lines after the header line
    pub rows: usize,
}
