//! Utility modules.

/// Epoch-millisecond timestamp serde helpers for vendor date fields.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
