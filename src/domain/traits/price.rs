use async_trait::async_trait;
use crate::domain::entities::PriceQuote;
use crate::application::errors::FetchError;

/// Source of the current BTC price.
///
/// One call is one attempt; no retries happen behind this trait.
#[async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch_price(&self) -> Result<PriceQuote, FetchError>;
}
