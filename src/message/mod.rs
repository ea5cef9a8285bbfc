//! Message entity and the wire-record decoder.

pub mod kind;
pub mod timestamp;


use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use self::kind::{classify, Kind};
use self::timestamp::{parse_timestamp, TimestampParseError};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("wire record is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("wire record field `{0}` has the wrong type")]
    WrongType(&'static str),
    #[error("wire record has an unparseable created_at: {0}")]
    Timestamp(#[from] TimestampParseError),
}

/// One event in a room's transcript. Immutable once built; a transcript is a
/// pure read model with no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub kind: Kind,
    /// Opaque unique identifier assigned by the service.
    pub id: String,
    /// Posting actor, when the service reports one.
    pub author_id: Option<String>,
    /// Textual payload; absent for kinds that carry none (Entry/Leave).
    pub body: Option<String>,
    /// Always `Some` on a decoded message; artificial messages may leave it
    /// unset.
    pub occurred_at: Option<DateTime<Utc>>,
    /// Annotation slot for presentation layers that resolve `author_id` to a
    /// human-readable name. The decoder never populates it.
    pub display_name: Option<String>,
}

impl Message {
    /// Build a client-local message (in-transit placeholder, error banner...)
    /// that never came from the service. Only `id`, `kind` and `body` are
    /// populated; callers must not assume the other fields are set.
    pub fn artificial(id: impl Into<String>, kind: Kind, body: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            author_id: None,
            body: Some(body.into()),
            occurred_at: None,
            display_name: None,
        }
    }

    /// Decode one wire record.
    ///
    /// An unrecognized `type` tag classifies as [`Kind::Unsupported`] rather
    /// than failing; a missing or mistyped field, or an unparseable
    /// `created_at`, fails with [`DecodeError`].
    pub fn decode(record: &Value) -> Result<Self, DecodeError> {
        let kind = classify(required_str(record, "type")?);
        let id = required_str(record, "id")?.to_string();

        let author_id = denull(required_str(record, "user_id")?);
        let body = denull(required_str(record, "body")?);

        let occurred_at = parse_timestamp(required_str(record, "created_at")?)?;

        Ok(Self {
            kind,
            id,
            author_id,
            body,
            occurred_at: Some(occurred_at),
            display_name: None,
        })
    }
}

/// Normalize the service's null sentinel: the literal string `"null"` means
/// absent. Anything else — including strings merely containing "null" —
/// passes through unchanged. Isolated here so downstream code never
/// special-cases the sentinel again.
pub fn denull(raw: &str) -> Option<String> {
    if raw == "null" {
        None
    } else {
        Some(raw.to_string())
    }
}

fn required_str<'a>(record: &'a Value, field: &'static str) -> Result<&'a str, DecodeError> {
    match record.get(field) {
        None => Err(DecodeError::MissingField(field)),
        Some(value) => value.as_str().ok_or(DecodeError::WrongType(field)),
    }
}
