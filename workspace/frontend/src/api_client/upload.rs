use crate::api_client;
use crate::settings;
use common::{ApiResponse, UploadReceipt};

/// Send an upload form to the backend.
///
/// Any 2xx counts as success. The receipt is returned when the server
/// sends one in the usual envelope.
pub async fn upload_file(form: web_sys::FormData) -> Result<Option<UploadReceipt>, String> {
    let url = settings::get_settings().upload_url();
    log::trace!("Uploading data to {}", url);

    let response = match api_client::post_form(&url, form).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error uploading file: {}", e);
            return Err(e);
        }
    };

    let receipt = response
        .json::<ApiResponse<UploadReceipt>>()
        .await
        .ok()
        .map(|envelope| envelope.data);
    match &receipt {
        Some(receipt) => log::info!("Upload stored as {} ({} rows)", receipt.stored_as, receipt.rows),
        None => log::debug!("Upload accepted without a receipt"),
    }
    Ok(receipt)
}
