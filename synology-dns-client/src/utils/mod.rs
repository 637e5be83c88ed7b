//! Utility modules.

/// Log sanitization utilities to prevent credential and session exposure.
pub mod log_sanitizer;

/// Lenient string deserialization for loosely typed API fields.
pub mod serde_string;
