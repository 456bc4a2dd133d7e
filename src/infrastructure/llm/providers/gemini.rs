//! Google Gemini Provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::llm::config::DEFAULT_TIMEOUT_SECS;
use crate::infrastructure::llm::{LLMMessage, LLMResponse, LLMError, LLMResult, LLM, LLMUsage};

/// Gemini API endpoint
const API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    model: String,
    base: String,
    json_output: bool,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: model.unwrap_or("gemini-1.5-flash").to_string(),
            base: API_BASE.to_string(),
            json_output: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Upper bound for a whole request, response body included
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask for `application/json` output
    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.json_output = enabled;
        self
    }

    fn base_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base, model)
    }
}

/// API request structure
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

/// API response structure
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

/// Split system messages out; Gemini takes them as `systemInstruction`
fn to_gemini(messages: Vec<LLMMessage>) -> (Option<GeminiContent>, Vec<GeminiContent>) {
    let mut system = Vec::new();
    let mut contents = Vec::new();

    for msg in messages {
        match msg.role.as_str() {
            "system" => system.push(Part { text: msg.content }),
            "assistant" => contents.push(GeminiContent {
                role: Some("model".to_string()),
                parts: vec![Part { text: msg.content }],
            }),
            _ => contents.push(GeminiContent {
                role: Some("user".to_string()),
                parts: vec![Part { text: msg.content }],
            }),
        }
    }

    let system = (!system.is_empty()).then(|| GeminiContent { role: None, parts: system });
    (system, contents)
}

#[async_trait]
impl LLM for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn chat(
        &self,
        messages: Vec<LLMMessage>,
        model: Option<&str>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse> {
        let model = model.unwrap_or(&self.model);
        let (system_instruction, contents) = to_gemini(messages);

        let request = GenerateRequest {
            contents,
            system_instruction,
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: max_tokens,
                response_mime_type: self.json_output.then_some("application/json"),
            },
        };

        let response = self.client
            .post(self.base_url(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(LLMError::from_request)?;

        if response.status() == 429 {
            return Err(LLMError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError(format!("status: {}, body: {}", status, body)));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        let candidate = generated.candidates
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidRequest("No candidates in response".to_string()))?;

        let content = candidate.content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join(""))
            .unwrap_or_default();

        let usage = generated.usage_metadata.map(|u| LLMUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LLMResponse {
            content: content.trim().to_string(),
            model: model.to_string(),
            usage,
            finish_reason: candidate.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_system_messages_become_instruction() {
        let (system, contents) = to_gemini(vec![
            LLMMessage::system("classify"),
            LLMMessage::user("hola"),
            LLMMessage {
                role: "assistant".to_string(),
                content: "ok".to_string(),
            },
        ]);

        let system = system.unwrap();
        assert_eq!(system.parts[0].text, "classify");
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }

    #[tokio::test]
    async fn test_chat_joins_candidate_parts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "systemInstruction": {"parts": [{"text": "classify"}]},
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "{\"classification\":"}, {"text": "\"ignore\"}\n"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4, "totalTokenCount": 7}
            })))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("test-key", None)
            .with_base_url(server.uri())
            .with_json_output(true);

        let response = provider
            .chat(vec![LLMMessage::system("classify"), LLMMessage::user("hola")], None, None, None)
            .await
            .unwrap();

        assert_eq!(response.content, "{\"classification\":\"ignore\"}");
        assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    }

    #[tokio::test]
    async fn test_chat_without_candidates_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("test-key", None).with_base_url(server.uri());
        let result = provider.chat(vec![LLMMessage::user("hola")], None, None, None).await;

        assert!(matches!(result, Err(LLMError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_chat_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"candidates": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("test-key", None)
            .with_base_url(server.uri())
            .with_timeout(Duration::from_secs(1));
        let result = provider.chat(vec![LLMMessage::user("hola")], None, None, None).await;

        assert!(matches!(result, Err(LLMError::Timeout)), "got: {:?}", result);
    }
}
