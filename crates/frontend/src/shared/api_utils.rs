//! Helpers for addressing the backup web service from the browser.

/// Get the base URL for service requests
///
/// Constructs the base URL from the current window location. The service
/// listens on its own port next to the game server (8765 by default).
///
/// # Returns
/// - Base URL like "http://localhost:8765" or "https://example.com:8765"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8765", protocol, hostname)
}

/// Build a full service URL from a path
///
/// # Arguments
/// * `path` - The request path (e.g. "/ajax/main" or "/action/enabledebug")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
