use serde::{Deserialize, Serialize};

/// Unified error type for all location source operations.
///
/// Each variant includes a `source` field identifying which data source
/// produced the error, plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// None of these errors are retried: the cascade surfaces a placeholder and
/// waits for the user to re-select the ancestor field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SourceError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, unexpected HTTP 5xx, etc.).
    NetworkError {
        /// Source that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The configured API credential was rejected (e.g. an unknown GeoNames
    /// username).
    InvalidCredentials {
        /// Source that produced the error.
        source: String,
        /// Original error message from the upstream API, if available.
        raw_message: Option<String>,
    },

    /// The upstream API's request budget has been exhausted (HTTP 429 or a
    /// GeoNames credit-limit status).
    RateLimited {
        /// Source that produced the error.
        source: String,
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Original error message from the upstream API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the upstream API response.
    ParseError {
        /// Source that produced the error.
        source: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the upstream API.
    ///
    /// Catch-all for status codes not yet mapped to a specific variant.
    Unknown {
        /// Source that produced the error.
        source: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl SourceError {
    /// Whether the error is expected behavior (bad credential, exhausted
    /// quota), used for log level classification.
    ///
    /// Log at `warn` when this returns `true`, at `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { source, detail } => {
                write!(f, "[{source}] Network error: {detail}")
            }
            Self::Timeout { source, detail } => {
                write!(f, "[{source}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                source,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{source}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{source}] Invalid credentials")
                }
            }
            Self::RateLimited {
                source,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{source}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{source}] Rate limited")
                }
            }
            Self::ParseError { source, detail } => {
                write!(f, "[{source}] Parse error: {detail}")
            }
            Self::Unknown {
                source,
                raw_message,
                ..
            } => {
                write!(f, "[{source}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Convenience type alias for `Result<T, SourceError>`.
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = SourceError::NetworkError {
            source: "backend".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[backend] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = SourceError::Timeout {
            source: "geonames".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[geonames] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = SourceError::InvalidCredentials {
            source: "geonames".to_string(),
            raw_message: Some("user does not exist".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[geonames] Invalid credentials: user does not exist"
        );
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = SourceError::InvalidCredentials {
            source: "geonames".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[geonames] Invalid credentials");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = SourceError::RateLimited {
            source: "restcountries".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "[restcountries] Rate limited (retry after 30s)"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = SourceError::ParseError {
            source: "backend".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[backend] Parse error: bad json");
    }

    #[test]
    fn display_unknown() {
        let e = SourceError::Unknown {
            source: "geonames".to_string(),
            raw_code: Some("22".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[geonames] something broke");
    }

    #[test]
    fn is_expected_classification() {
        assert!(
            SourceError::InvalidCredentials {
                source: "t".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            SourceError::RateLimited {
                source: "t".into(),
                retry_after: None,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !SourceError::NetworkError {
                source: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !SourceError::ParseError {
                source: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_tagged() {
        let e = SourceError::RateLimited {
            source: "geonames".to_string(),
            retry_after: Some(60),
            raw_message: Some("credit limit exceeded".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn deserialize_round_trip() {
        let original = SourceError::NetworkError {
            source: "backend".to_string(),
            detail: "connection refused".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: SourceError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
