//! ETH/USD price oracles

pub mod aggregator;
pub mod chainlink_api;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::FeedError;

pub use aggregator::AggregatorOracle;
pub use chainlink_api::ChainlinkApiOracle;

pub mod defaults {
    /// Price used when the oracle cannot be reached
    pub const FALLBACK_ETH_PRICE: f64 = 2000.0;
}

/// Source of the current ETH/USD price
#[async_trait]
pub trait PriceOracle: Send + Sync {
    async fn eth_usd(&self) -> Result<f64, FeedError>;

    fn name(&self) -> &'static str;
}

/// Where a quoted price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub price: f64,
    pub source: PriceSource,
}

impl PriceQuote {
    pub fn is_degraded(&self) -> bool {
        self.source == PriceSource::Fallback
    }
}

/// Wraps an oracle and substitutes a fixed price when it fails.
///
/// The quote records whether the price is live or the fallback, so callers
/// can surface degraded data instead of silently serving the constant.
#[derive(Clone)]
pub struct FallbackOracle {
    inner: Arc<dyn PriceOracle>,
    fallback_price: f64,
}

impl FallbackOracle {
    pub fn new(inner: Arc<dyn PriceOracle>, fallback_price: f64) -> Self {
        Self {
            inner,
            fallback_price,
        }
    }

    pub async fn quote(&self) -> PriceQuote {
        match self.inner.eth_usd().await {
            Ok(price) => PriceQuote {
                price,
                source: PriceSource::Live,
            },
            Err(e) => {
                tracing::warn!(
                    oracle = self.inner.name(),
                    fallback = self.fallback_price,
                    "Error fetching ETH price: {}",
                    e
                );
                PriceQuote {
                    price: self.fallback_price,
                    source: PriceSource::Fallback,
                }
            }
        }
    }

    pub fn oracle_name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Oracle returning a fixed price
#[derive(Debug, Clone, Copy)]
pub struct StaticOracle(pub f64);

#[async_trait]
impl PriceOracle for StaticOracle {
    async fn eth_usd(&self) -> Result<f64, FeedError> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Accept only finite, positive prices
pub(crate) fn validate_price(price: f64) -> Result<f64, FeedError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(FeedError::InvalidResponse(format!("price {price} out of range")))
    }
}
