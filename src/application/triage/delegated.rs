//! Model-backed triage.
//!
//! The model is asked for `{"reasoning": ..., "classification": ...}`. Any
//! failure along the way (call error, unparseable output, label outside the
//! closed set) yields `Intent::Ignore`, with the diagnostic kept in the
//! rationale.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::{ClassificationResult, Intent};
use crate::domain::traits::Classifier;
use crate::infrastructure::llm::{LLM, LLMMessage};

/// Instruction sent with every message
pub const TRIAGE_PROMPT: &str = "Eres un asistente que clasifica mensajes de Telegram.\n\
Categorías posibles:\n\
- 'btc_price' → si el usuario pregunta por el precio del Bitcoin o BTC/USDT\n\
- 'about' → si pregunta qué haces o quién eres\n\
- 'ignore' → para cualquier otro mensaje\n\n\
Responde solo con un objeto JSON: {\"reasoning\": \"<explicación breve>\", \"classification\": \"btc_price\" | \"about\" | \"ignore\"}";

/// Structured verdict returned by the model
#[derive(Debug, Deserialize)]
struct Verdict {
    #[serde(default)]
    reasoning: Option<String>,
    classification: String,
}

/// Classifier that delegates to an LLM
pub struct LlmClassifier {
    llm: Arc<dyn LLM>,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl LlmClassifier {
    pub fn new(llm: Arc<dyn LLM>) -> Self {
        Self {
            llm,
            temperature: 0.0,
            max_tokens: Some(256),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Narrow model output down to the JSON object it should contain
fn json_payload(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

/// Turn raw model output into a classification, never failing
pub fn parse_verdict(raw: &str) -> ClassificationResult {
    let Some(payload) = json_payload(raw) else {
        return ClassificationResult::ignore(format!("no JSON object in model output: {:?}", raw));
    };

    let verdict: Verdict = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            return ClassificationResult::ignore(format!("unparseable model output ({}): {:?}", e, raw));
        }
    };

    match verdict.classification.parse::<Intent>() {
        Ok(intent) => {
            let result = ClassificationResult::new(intent);
            match verdict.reasoning {
                Some(reasoning) => result.with_rationale(reasoning),
                None => result,
            }
        }
        Err(e) => ClassificationResult::ignore(e.to_string()),
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    fn name(&self) -> &str {
        "llm"
    }

    async fn classify(&self, text: &str) -> ClassificationResult {
        let messages = vec![
            LLMMessage::system(TRIAGE_PROMPT),
            LLMMessage::user(text),
        ];

        let response = match self.llm.chat(messages, None, Some(self.temperature), self.max_tokens).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Classification call to {} failed: {}", self.llm.name(), e);
                return ClassificationResult::ignore(format!("classification call failed: {}", e));
            }
        };

        let result = parse_verdict(&response.content);
        tracing::info!(
            "Classified as {} (reasoning: {})",
            result.intent,
            result.rationale.as_deref().unwrap_or("-")
        );
        result
    }
}
