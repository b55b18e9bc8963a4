//! Shared source utilities

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with timeout configuration.
///
/// A hung upstream would otherwise pin a selector in its loading state
/// until the user gives up.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ URL helpers ============

/// Join a base URL and a path, tolerating a trailing slash on the base.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_plain() {
        assert_eq!(
            join_url("http://localhost:5000", "location/countries"),
            "http://localhost:5000/location/countries"
        );
    }

    #[test]
    fn join_url_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:5000/", "/location/countries"),
            "http://localhost:5000/location/countries"
        );
    }
}
