//! Parser for the service's fixed `created_at` format.

use chrono::{DateTime, Utc};
use thiserror::Error;

// The service always emits exactly this shape, e.g. "24/05/01 10:00:00 +0000".
const WIRE_FORMAT: &str = "%y/%m/%d %H:%M:%S %z";

#[derive(Debug, Error)]
#[error("could not parse timestamp {text:?}")]
pub struct TimestampParseError {
    pub text: String,
    #[source]
    source: chrono::ParseError,
}

/// Parse a wire timestamp into an absolute instant. The embedded offset is
/// honored and the result normalized to UTC; no alternate formats are tried.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    DateTime::parse_from_str(text, WIRE_FORMAT)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| TimestampParseError {
            text: text.to_string(),
            source,
        })
}
