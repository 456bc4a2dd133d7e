//! Price data - BTC quote lookup over HTTP
//!
//! Reads `quotes.USD.price` from a Coinpaprika-style ticker response.

use async_trait::async_trait;
use reqwest::Client;

use crate::application::errors::FetchError;
use crate::domain::entities::PriceQuote;
use crate::domain::traits::PriceFetcher;
use crate::infrastructure::config::PriceConfig;

/// Fetches the BTC ticker from a Coinpaprika-compatible endpoint
pub struct CoinpaprikaFetcher {
    client: Client,
    endpoint: String,
    currency: String,
}

impl CoinpaprikaFetcher {
    pub fn new(config: &PriceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("btc-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            currency: config.currency.clone(),
        })
    }
}

/// Pull `quotes.USD.price` out of a ticker body.
///
/// A missing, null, non-numeric or non-positive price means no quote is
/// available right now.
pub fn extract_usd_price(body: &serde_json::Value) -> Option<f64> {
    body.get("quotes")?
        .get("USD")?
        .get("price")?
        .as_f64()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[async_trait]
impl PriceFetcher for CoinpaprikaFetcher {
    async fn fetch_price(&self) -> Result<PriceQuote, FetchError> {
        tracing::debug!("Fetching BTC price from {}", self.endpoint);

        let response = self.client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let amount = extract_usd_price(&body).ok_or(FetchError::PriceUnavailable)?;

        Ok(PriceQuote::new(amount, self.currency.clone()))
    }
}
