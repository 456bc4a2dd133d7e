use async_trait::async_trait;
use crate::domain::entities::ClassificationResult;

/// Maps free text to an intent.
///
/// Implementations are total: they always return a result and fall back to
/// `Intent::Ignore` instead of failing.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Policy name, for logs
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> ClassificationResult;
}
