//! Shared integration-test helpers

#![allow(dead_code)]

/// Skip the test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Environment variable holding the local backend base URL.
pub const BACKEND_BASE_VAR: &str = "GEOCASCADE_API_BASE";

/// Environment variable holding the GeoNames username.
pub const GEONAMES_USER_VAR: &str = "GEONAMES_USERNAME";
