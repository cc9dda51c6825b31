//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL of the wallet API host
///
/// Constructs the base URL from the current window location,
/// using `port` for the API server.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Join a host base and a path prefix without doubling or dropping slashes
///
/// # Example
/// ```rust
/// use wallet_frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://h:3000/", "api/v1"), "http://h:3000/api/v1");
/// ```
pub fn join_url(base: &str, prefix: &str) -> String {
    let base = base.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "/api/v1"), "http://h:3000/api/v1");
        assert_eq!(join_url("http://h:3000/", "/api/v1/"), "http://h:3000/api/v1");
        assert_eq!(join_url("http://h:3000", ""), "http://h:3000");
    }
}
