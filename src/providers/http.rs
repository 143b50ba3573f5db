//! Feed-gateway HTTP client.
//!
//! Fetches raw quotes from a REST gateway exposing
//! `GET {base_url}/v1/feeds/{identifier}` as
//! `{"value": "<decimal string>", "decimals": n, "updated_at": <rfc3339>}`.

use alloy_primitives::U256;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{PricingError, PricingResult};
use crate::feed::{FeedQuote, FeedSource};

pub struct HttpFeedSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(base_url: &str) -> PricingResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("basketnav/0.1")
            .build()
            .map_err(|e| PricingError::Transport(e.to_string()))?;
        Ok(HttpFeedSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GatewayQuote {
    /// Unscaled value as a decimal string; gateways report values wider
    /// than u64 for low-decimal, high-supply feeds.
    value: String,
    decimals: u8,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    #[instrument(name = "GatewayFeedFetch", skip(self), fields(identifier = %identifier))]
    async fn fetch(&self, identifier: &str) -> PricingResult<FeedQuote> {
        let url = format!("{}/v1/feeds/{}", self.base_url, identifier);
        debug!("Requesting quote from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PricingError::Transport(format!("request error for {identifier}: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PricingError::FeedUnavailable(identifier.to_string()));
        }
        if !response.status().is_success() {
            return Err(PricingError::Transport(format!(
                "HTTP {} for feed {identifier}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PricingError::Transport(format!("body read failed for {identifier}: {e}")))?;
        let quote: GatewayQuote = serde_json::from_str(&text).map_err(|e| {
            PricingError::Transport(format!("malformed response for {identifier}: {e}"))
        })?;

        let value = U256::from_str_radix(&quote.value, 10).map_err(|e| {
            PricingError::Transport(format!("malformed value for {identifier}: {e}"))
        })?;

        Ok(FeedQuote {
            value,
            decimals: quote.decimals,
            updated_at: quote.updated_at,
        })
    }
}
