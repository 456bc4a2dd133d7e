use async_trait::async_trait;
use crate::domain::entities::{ClassificationResult, Intent};
use crate::domain::traits::Classifier;

/// Rule-based triage: a price query mentions BTC together with USD or USDT
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_text(&self, text: &str) -> Intent {
        let text = text.to_lowercase();
        if text.contains("btc") && (text.contains("usdt") || text.contains("usd")) {
            Intent::PriceQuery
        } else {
            Intent::Ignore
        }
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, text: &str) -> ClassificationResult {
        ClassificationResult::new(self.classify_text(text))
    }
}
