use crate::api_client;
use crate::settings;
use common::{ExplanationRequest, ExplanationResponse};

/// Ask the configured explanation endpoint about `prediction`
pub async fn get_explanation(prediction: String) -> Result<String, String> {
    let url = settings::get_settings().explanation_url();
    log::trace!("Requesting explanation from {}", url);

    let request = ExplanationRequest { prediction };
    let result = api_client::post_json::<ExplanationResponse, _>(&url, &request).await;

    match result {
        Ok(response) => {
            log::info!("Received explanation ({} characters)", response.explanation.len());
            Ok(response.explanation)
        }
        Err(e) => {
            log::error!("Error fetching explanation: {}", e);
            Err(e)
        }
    }
}
