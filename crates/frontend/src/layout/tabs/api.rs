use super::TabKey;
use crate::shared::api_utils::api_url;
use gloo_net::http::Request;

/// Fetch the HTML fragment for one pane.
pub async fn fetch_fragment(key: TabKey) -> Result<String, String> {
    let response = Request::get(&api_url(&key.fragment_path()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load fragment: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
