//! API base URL resolution.

/// Base URL of the marketplace REST API.
///
/// Taken from `API_BASE_URL` at compile time when set; otherwise built from the
/// current window location on port 3000.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/sellers/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
