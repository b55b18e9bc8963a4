//! Utility modules.

/// Log sanitization utilities to keep response bodies out of full logs.
pub mod log_sanitizer;
