use std::{str::FromStr, time::Duration};

use alloy::{
    primitives::{Address, I256},
    providers::ProviderBuilder,
    sol,
};
use async_trait::async_trait;
use tokio::time::timeout;

use super::{validate_price, PriceOracle};
use crate::error::FeedError;

/// Sepolia ETH/USD aggregator
pub const ETH_USD_FEED_SEPOLIA: &str = "0x694AA1769357215DE4FAC081bf1f309aDC325306";
/// Sepolia BTC/USD aggregator
pub const BTC_USD_FEED_SEPOLIA: &str = "0x1b44F3514812d835EB1BDB0acB33d3fA3351Ee43";

/// USD feeds answer with 8 decimals
const FEED_DECIMALS: i32 = 8;

sol! {
    #[sol(rpc)]
    interface AggregatorV3Interface {
        function latestRoundData() external view returns (
            uint80 roundId,
            int256 answer,
            uint256 startedAt,
            uint256 updatedAt,
            uint80 answeredInRound
        );
    }
}

/// Reads the latest answer of a Chainlink aggregator contract over JSON-RPC
pub struct AggregatorOracle {
    rpc_url: String,
    feed_address: Address,
    timeout: Duration,
}

impl AggregatorOracle {
    pub fn new(rpc_url: &str, feed_address: &str, timeout: Duration) -> Result<Self, FeedError> {
        let feed_address = Address::from_str(feed_address)
            .map_err(|_| FeedError::InvalidAddress(feed_address.to_string()))?;

        Ok(Self {
            rpc_url: rpc_url.to_string(),
            feed_address,
            timeout,
        })
    }

    async fn latest_answer(&self) -> Result<I256, FeedError> {
        let provider = ProviderBuilder::new()
            .on_builtin(&self.rpc_url)
            .await
            .map_err(|e| FeedError::Rpc(e.to_string()))?;

        let feed = AggregatorV3Interface::new(self.feed_address, provider);
        let round = feed
            .latestRoundData()
            .call()
            .await
            .map_err(|e| FeedError::Rpc(e.to_string()))?;

        Ok(round.answer)
    }
}

#[async_trait]
impl PriceOracle for AggregatorOracle {
    async fn eth_usd(&self) -> Result<f64, FeedError> {
        let answer = timeout(self.timeout, self.latest_answer())
            .await
            .map_err(|_| FeedError::Timeout(self.timeout.as_secs()))??;

        scale_answer(answer)
    }

    fn name(&self) -> &'static str {
        "chainlink-feed"
    }
}

/// Convert a raw aggregator answer into a USD price
fn scale_answer(answer: I256) -> Result<f64, FeedError> {
    let raw = answer
        .to_string()
        .parse::<f64>()
        .map_err(|e| FeedError::InvalidResponse(e.to_string()))?;

    validate_price(raw / 10_f64.powi(FEED_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_answer() {
        let answer = "325012345678".parse::<I256>().unwrap();
        let price = scale_answer(answer).unwrap();
        assert!((price - 3250.12345678).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_answer_rejected() {
        assert!(scale_answer(I256::ZERO).is_err());
        assert!(scale_answer("-100000000".parse::<I256>().unwrap()).is_err());
    }

    #[test]
    fn test_invalid_feed_address() {
        let result =
            AggregatorOracle::new("http://localhost:8545", "0xnope", Duration::from_secs(1));
        assert!(matches!(result, Err(FeedError::InvalidAddress(_))));

        assert!(AggregatorOracle::new(
            "http://localhost:8545",
            BTC_USD_FEED_SEPOLIA,
            Duration::from_secs(1)
        )
        .is_ok());
    }
}
