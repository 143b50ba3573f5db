//! Raw price source abstraction.

use alloy_primitives::U256;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::PricingResult;

/// One raw quote as reported by a feed source, prior to normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuote {
    /// Unscaled feed value.
    pub value: U256,
    /// Number of fractional decimal digits in `value`.
    pub decimals: u8,
    /// When the source last refreshed this feed. Staleness is not checked
    /// by the registry; the field is carried for the embedding layer.
    pub updated_at: DateTime<Utc>,
}

/// A source of raw quotes keyed by feed identifier.
///
/// Implementations fail with [`crate::PricingError::FeedUnavailable`] when
/// no data exists for an identifier.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, identifier: &str) -> PricingResult<FeedQuote>;
}
