//! Utility modules.

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Lenient string deserialization for loosely typed API fields.
pub mod lenient_string;

/// `null` treated as the field's default value.
pub mod null_default;
