pub mod explanation;
pub mod upload;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

/// Error bodies the backend may return. The explanation endpoint answers
/// with `{ error }`, the enveloped endpoints add `code` and `success`.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Turn a non-OK response into an error message, preferring the server's own text
async fn error_from_response(method: &str, url: &str, response: Response) -> String {
    log::warn!("{} {} - Non-OK response: {}", method, url, response.status());
    match response.json::<ErrorPayload>().await {
        Ok(err) => {
            log::error!("{} {} - API error: {}", method, url, err.error);
            format!("Error: {}", err.error)
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", response.status());
            log::error!("{} {} - {}", method, url, error_msg);
            error_msg
        }
    }
}

async fn parse_json<T>(method: &str, url: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("{} {} - Response received, parsing JSON", method, url);
    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, url, error_msg);
        error_msg
    })
}

/// POST a JSON body to an absolute URL and parse a JSON reply
pub async fn post_json<T, B>(url: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    log::debug!("POST request to: {}", url);

    let response = Request::post(url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", url, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", url, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(error_from_response("POST", url, response).await);
    }

    let parsed = parse_json("POST", url, response).await?;
    log::info!("POST {} - Success", url);
    Ok(parsed)
}

/// POST multipart form data. Success is judged by status alone; the
/// response is handed back for the caller to inspect.
pub async fn post_form(url: &str, form: web_sys::FormData) -> Result<Response, String> {
    log::debug!("POST (multipart) request to: {}", url);

    // The browser sets the multipart boundary header itself
    let response = Request::post(url)
        .body(form)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", url, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", url, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(error_from_response("POST", url, response).await);
    }

    log::info!("POST {} - Success", url);
    Ok(response)
}
