//! Generic HTTP client tools
//!
//! Reusable request processing shared by the source implementations: send
//! the request, log, classify transport-level failures, read the body.
//! Response parsing stays with each source since the payload shapes differ.
//!
//! There is deliberately no retry layer here: the cascade performs
//! on-demand fetches only, and a failure is surfaced to the user as a
//! placeholder on the affected selector.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// Unified processing: sending the request, logging, error handling.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, headers)
    /// * `source_name` - source name (for logging and error context)
    /// * `url_or_action` - URL or short action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on success
    /// * `Err(SourceError)` for timeouts, network failures, HTTP 429 and
    ///   5xx responses
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), SourceError> {
        log::debug!("[{source_name}] GET {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout {
                    source: source_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                SourceError::NetworkError {
                    source: source_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{source_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming the response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let response_text = response.text().await.map_err(|e| SourceError::NetworkError {
            source: source_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        if let Some(error) =
            Self::map_error_status(status_code, retry_after, &response_text, source_name)
        {
            log::warn!("[{source_name}] HTTP {status_code}: {error}");
            return Err(error);
        }

        log::debug!(
            "[{source_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Classify a non-success HTTP status; `None` means the response is
    /// safe to hand to the payload parser.
    fn map_error_status(
        status_code: u16,
        retry_after: Option<u64>,
        body: &str,
        source_name: &str,
    ) -> Option<SourceError> {
        match status_code {
            200..=299 => None,
            429 => Some(SourceError::RateLimited {
                source: source_name.to_string(),
                retry_after,
                raw_message: Some(body.to_string()),
            }),
            500..=504 => Some(SourceError::NetworkError {
                source: source_name.to_string(),
                detail: format!("HTTP {status_code}: {body}"),
            }),
            // Remaining 3xx/4xx (e.g. a backend 404 for an unknown country
            // code) must not reach the JSON parser
            _ => Some(SourceError::Unknown {
                source: source_name.to_string(),
                raw_code: Some(status_code.to_string()),
                raw_message: body.to_string(),
            }),
        }
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` on success
    /// * `Err(SourceError::ParseError)` when deserialization fails
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, SourceError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            SourceError::ParseError {
                source: source_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, SourceError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, SourceError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(SourceError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn success_statuses_pass_through() {
        for status in [200, 201, 204] {
            assert!(HttpUtils::map_error_status(status, None, "", "test").is_none());
        }
    }

    #[test]
    fn not_found_maps_to_unknown_not_parse_error() {
        let result = HttpUtils::map_error_status(404, None, "Not Found", "backend");
        assert!(
            matches!(
                &result,
                Some(SourceError::Unknown { raw_code: Some(code), .. }) if code == "404"
            ),
            "unexpected mapping: {result:?}"
        );
    }

    #[test]
    fn rate_limit_maps_with_retry_after() {
        let result = HttpUtils::map_error_status(429, Some(30), "slow down", "backend");
        assert!(
            matches!(
                result,
                Some(SourceError::RateLimited {
                    retry_after: Some(30),
                    ..
                })
            ),
        );
    }

    #[test]
    fn server_errors_map_to_network_error() {
        for status in [500, 502, 504] {
            let result = HttpUtils::map_error_status(status, None, "oops", "backend");
            assert!(
                matches!(&result, Some(SourceError::NetworkError { detail, .. })
                    if detail.contains(&status.to_string())),
                "unexpected mapping for {status}: {result:?}"
            );
        }
    }

    #[test]
    fn parse_json_list() {
        let result: Result<Vec<crate::types::Country>, SourceError> = HttpUtils::parse_json(
            r#"[{"code":"BE","name":"Belgique"},{"code":"FR","name":"France"}]"#,
            "backend",
        );
        let countries = result.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code, "BE");
        assert_eq!(countries[1].name, "France");
    }
}
