//! Retrieval of the trailing window of today's transcript for a room.


use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::message::kind::Kind;
use crate::message::{DecodeError, Message};
use crate::sources::ListingSource;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("could not load the transcript listing: {0}")]
    Listing(#[source] anyhow::Error),
    #[error("could not decode a transcript record: {0}")]
    Decode(#[from] DecodeError),
}

/// Path of a room's "today" transcript resource. Exposed so collaborators
/// (cache keys, prefetchers) can derive the same path independently.
pub fn today_path(room_id: &str) -> String {
    format!("/room/{room_id}/transcript")
}

pub struct TranscriptClient {
    listing: Arc<dyn ListingSource>,
}

impl TranscriptClient {
    pub fn new(listing: Arc<dyn ListingSource>) -> Self {
        Self { listing }
    }

    /// Today's messages for `room_id`, oldest first, capped to the trailing
    /// `max` raw records when `0 < max < total`. `None`, zero and negative
    /// `max` all mean "everything".
    ///
    /// The window is cut over the raw records, before unsupported kinds are
    /// dropped, so fewer than `max` messages may come back even when earlier
    /// supported records exist. Inherited retrieval policy, kept as is;
    /// callers must not expect backfill.
    ///
    /// One malformed record anywhere in the window fails the whole call — a
    /// partially decoded transcript is worse than a clear failure.
    #[instrument(skip(self))]
    pub async fn fetch_today(
        &self,
        room_id: &str,
        max: Option<i64>,
    ) -> Result<Vec<Message>, TranscriptError> {
        let items = self
            .listing
            .get_list(&today_path(room_id), "messages")
            .await
            .map_err(TranscriptError::Listing)?;

        let start = match max {
            Some(m) if m > 0 && (m as usize) < items.len() => items.len() - m as usize,
            _ => 0,
        };
        debug!(
            source = self.listing.name(),
            total = items.len(),
            start,
            "windowing transcript"
        );

        let mut messages = Vec::with_capacity(items.len() - start);
        for record in &items[start..] {
            let message = Message::decode(record)?;
            if message.kind != Kind::Unsupported {
                messages.push(message);
            }
        }
        Ok(messages)
    }
}
