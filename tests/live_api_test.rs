//! Live API checks against the real quote and model endpoints
//! Run with: cargo test --test live_api_test -- --ignored

use std::sync::Once;

use btc_bot::application::triage::LlmClassifier;
use btc_bot::domain::entities::Intent;
use btc_bot::domain::traits::{Classifier, PriceFetcher};
use btc_bot::infrastructure::config::PriceConfig;
use btc_bot::infrastructure::llm::{build_provider, LLMConfig};
use btc_bot::infrastructure::pricing::CoinpaprikaFetcher;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Coinpaprika answers with a positive BTC price
#[tokio::test]
#[ignore] // Requires network access
async fn test_coinpaprika_ticker() {
    ensure_init();

    let fetcher = CoinpaprikaFetcher::new(&PriceConfig::default()).expect("client should build");
    let quote = fetcher.fetch_price().await.expect("Should fetch BTC price");

    assert!(quote.amount > 0.0, "Price should be positive: {}", quote.amount);
    assert_eq!(quote.currency, "USDT");
}

/// The configured model classifies an obvious price question
#[tokio::test]
#[ignore] // Requires OPENAI_API_KEY / GROQ_API_KEY / GEMINI_API_KEY and LLM_PROVIDER
async fn test_llm_classifies_price_question() {
    ensure_init();

    let config = LLMConfig::from_env();
    let llm = build_provider(&config).expect("API key for the selected provider must be set");
    let classifier = LlmClassifier::new(llm);

    let result = classifier.classify("¿Cuál es el precio del Bitcoin en USDT?").await;

    assert_eq!(result.intent, Intent::PriceQuery, "rationale: {:?}", result.rationale);
}

/// An invalid key degrades to Ignore instead of failing
#[tokio::test]
#[ignore] // Requires network access
async fn test_invalid_api_key_degrades_to_ignore() {
    ensure_init();

    let config = LLMConfig {
        openai_api_key: Some("invalid-key".to_string()),
        ..LLMConfig::default()
    };
    let classifier = LlmClassifier::new(build_provider(&config).expect("key is set"));

    let result = classifier.classify("¿Cuál es el precio del BTC/USDT?").await;

    assert_eq!(result.intent, Intent::Ignore);
    assert!(result.rationale.unwrap_or_default().contains("API error"));
}
