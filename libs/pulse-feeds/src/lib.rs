//! Upstream data feeds for ChainPulse
//!
//! - `price`: ETH/USD oracles (Chainlink REST API, onchain aggregator) with a
//!   fallback price when the oracle is unavailable
//! - `twitter`: project mentions from the Twitter/X v2 API

pub mod error;
pub mod price;
pub mod twitter;

pub use error::FeedError;
pub use price::{FallbackOracle, PriceOracle, PriceQuote, PriceSource};
pub use twitter::{MentionPage, MentionQuery, MentionsSource};
