//! Structured logging for the Boxscore gateway.
//!
//! JSON console output, daily-rotated NDJSON files, and secret redaction
//! for strings that may embed upstream error text.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_secrets;
