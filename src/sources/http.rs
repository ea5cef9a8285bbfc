//! reqwest-backed listing source for the room service's JSON endpoints.

use super::ListingSource;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

pub struct HttpListing {
    client: Client,
    base: Url,
}

impl HttpListing {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    /// Base URL from `CAMPLINE_BASE_URL`; a `.env` file is honored.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let raw = std::env::var("CAMPLINE_BASE_URL").context("CAMPLINE_BASE_URL is not set")?;
        let base = Url::parse(&raw).context("CAMPLINE_BASE_URL is not a valid URL")?;
        Ok(Self::new(base))
    }
}

#[async_trait]
impl ListingSource for HttpListing {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_list(&self, path: &str, key: &str) -> anyhow::Result<Vec<Value>> {
        // the service serves JSON under "{path}.json"
        let url = self.base.join(&format!("{path}.json"))?;
        debug!(%url, key, "fetching list");

        let body: Value = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = body
            .get(key)
            .and_then(Value::as_array)
            .with_context(|| format!("response from {url} has no `{key}` array"))?;
        Ok(items.clone())
    }
}
