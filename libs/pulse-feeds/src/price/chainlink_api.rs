use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{validate_price, PriceOracle};
use crate::error::FeedError;

pub const CHAINLINK_API_URL: &str = "https://api.chain.link/v1/price";

/// Response of the Chainlink price endpoint
#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: Option<f64>,
}

/// ETH/USD price from the Chainlink REST API
pub struct ChainlinkApiOracle {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl ChainlinkApiOracle {
    pub fn new(url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl PriceOracle for ChainlinkApiOracle {
    async fn eth_usd(&self) -> Result<f64, FeedError> {
        let mut request = self.client.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_price(&body)
    }

    fn name(&self) -> &'static str {
        "chainlink-api"
    }
}

fn parse_price(body: &str) -> Result<f64, FeedError> {
    let parsed: PriceResponse =
        serde_json::from_str(body).map_err(|e| FeedError::InvalidResponse(e.to_string()))?;

    let price = parsed
        .price
        .ok_or_else(|| FeedError::InvalidResponse("missing `price`".to_string()))?;

    validate_price(price)
}
