//! Closed classification of transcript events.

use serde::Serialize;

/// Number of real wire kinds. Their discriminants are densely packed over
/// `0..SUPPORTED_KINDS`; collaborators size ordinal-indexed lookup tables
/// with this constant.
pub const SUPPORTED_KINDS: usize = 6;

/// Semantic type of a [`Message`](super::Message).
///
/// The six wire kinds keep their declared order and discriminants — external
/// consumers index by ordinal, not by name. The negative members are
/// client-local pseudo-kinds for artificial messages; of those only
/// `Unsupported` is ever produced by the decoder, as the fallback for
/// unrecognized tags.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    /// Unrecognized wire tag, or a caller-made placeholder.
    Unsupported = -3,
    /// Client-local error marker; never decoded from wire data.
    Error = -2,
    /// Client-local "still sending" marker; never decoded from wire data.
    Transit = -1,
    Text = 0,
    Timestamp = 1,
    Entry = 2,
    Leave = 3,
    Paste = 4,
    Topic = 5,
}

impl Kind {
    /// Stable discriminant, `0..=5` for wire kinds and negative for the rest.
    pub fn ordinal(self) -> i8 {
        self as i8
    }
}

/// Map a wire-format type tag onto a [`Kind`]. Total: unknown tags become
/// `Unsupported`, never an error. Comparison is exact and case-sensitive.
pub fn classify(tag: &str) -> Kind {
    match tag {
        "TextMessage" => Kind::Text,
        "PasteMessage" => Kind::Paste,
        "TimestampMessage" => Kind::Timestamp,
        "EnterMessage" => Kind::Entry,
        "LeaveMessage" | "KickMessage" => Kind::Leave,
        "TopicChangeMessage" => Kind::Topic,
        _ => Kind::Unsupported,
    }
}
