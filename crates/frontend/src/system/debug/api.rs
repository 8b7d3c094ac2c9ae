use crate::shared::api_utils::api_url;
use contracts::system::debug::DebugStatusEntry;
use gloo_net::http::Request;

/// Ask the service to enable its debug/verbose mode.
///
/// Error strings carry the failure status and detail text so the caller can
/// surface them verbatim.
pub async fn enable_debug() -> Result<Vec<DebugStatusEntry>, String> {
    let response = Request::get(&api_url("/action/enabledebug"))
        .send()
        .await
        .map_err(|e| failure_message("error", &e.to_string()))?;

    if !response.ok() {
        return Err(failure_message(
            &response.status().to_string(),
            &response.status_text(),
        ));
    }

    response
        .json()
        .await
        .map_err(|e| failure_message("parsererror", &e.to_string()))
}

/// "<status> <detail>", the shape shown to the operator on failure.
pub fn failure_message(status: &str, detail: &str) -> String {
    format!("{} {}", status, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_contains_status_and_detail() {
        let msg = failure_message("500", "Internal Server Error");
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Server Error"));
        assert_eq!(msg, "500 Internal Server Error");
    }
}
