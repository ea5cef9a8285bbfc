//! The listing collaborator seam: ordered record arrays by resource path.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

/// Collaborator that, given a resource path and a named array key, returns
/// the ordered raw records found under that key in the response body. The
/// crate never builds HTTP requests or handles authentication itself.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the ordered array under `key` at `path`.
    async fn get_list(&self, path: &str, key: &str) -> anyhow::Result<Vec<Value>>;
}
