//! Error types for registry and valuation operations.
//!
//! Every error is terminal for the call that raised it. The library never
//! retries internally; the embedding layer owns retry and backoff policy.

use alloy_primitives::Address;
use thiserror::Error;

/// Result type for pricing and valuation operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PricingError {
    /// Mutating registry call from a non-administrator.
    #[error("caller {0} is not the registry administrator")]
    Unauthorized(Address),

    /// No feed registered for the pair in either orientation.
    #[error("no price feed registered for pair {0}/{1}")]
    PairNotFound(Address, Address),

    /// The raw source has no data for a resolved identifier.
    #[error("price feed {0} is not available")]
    FeedUnavailable(String),

    /// Aggregate basket value below zero after signed accumulation.
    #[error("basket valuation is negative")]
    NegativeValuation,

    /// Checked arithmetic failed while computing the described step.
    #[error("arithmetic overflow while {0}")]
    Overflow(&'static str),

    /// Transport or decoding failure on a remote feed source.
    #[error("feed transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_error_display() {
        let caller = address!("0x00000000000000000000000000000000000000aa");
        let err = PricingError::Unauthorized(caller);
        assert!(err.to_string().contains("not the registry administrator"));

        let err = PricingError::FeedUnavailable("ETH/USD".to_string());
        assert_eq!(err.to_string(), "price feed ETH/USD is not available");

        let err = PricingError::Overflow("scaling raw value");
        assert_eq!(
            err.to_string(),
            "arithmetic overflow while scaling raw value"
        );
    }
}
