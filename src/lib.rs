//! campline: the message model of a chat-room transcript client.
//!
//! Wire records from the room service are classified into a closed taxonomy,
//! decoded into [`Message`] values, and retrieved as a bounded trailing
//! window of today's transcript. Transport, authentication and room/session
//! management live elsewhere; this crate only consumes a listing collaborator.

pub mod message;
pub mod sources;
pub mod transcript;

// Re-exports to keep caller paths short
pub use message::kind::{classify, Kind, SUPPORTED_KINDS};
pub use message::timestamp::{parse_timestamp, TimestampParseError};
pub use message::{denull, DecodeError, Message};
pub use sources::ListingSource;
pub use transcript::{today_path, TranscriptClient, TranscriptError};
