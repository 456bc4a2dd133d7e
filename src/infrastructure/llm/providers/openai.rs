//! OpenAI-compatible Provider (OpenAI, Groq)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::llm::config::DEFAULT_TIMEOUT_SECS;
use crate::infrastructure::llm::{LLMMessage, LLMResponse, LLMError, LLMResult, LLM, LLMUsage};

/// OpenAI API endpoint
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Groq API endpoint
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Provider for any `/chat/completions` compatible API
pub struct OpenAiProvider {
    name: String,
    api_key: String,
    client: Client,
    model: String,
    base: String,
    json_output: bool,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>, model: Option<&str>) -> Self {
        Self {
            name: "openai".to_string(),
            api_key: api_key.into(),
            client: Client::new(),
            model: model.unwrap_or("gpt-4o-mini").to_string(),
            base: OPENAI_API_BASE.to_string(),
            json_output: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn groq(api_key: impl Into<String>, model: Option<&str>) -> Self {
        Self::new(api_key, Some(model.unwrap_or("llama-3.1-8b-instant")))
            .with_name("groq")
            .with_base_url(GROQ_API_BASE)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
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

    /// Ask the API to constrain output to a JSON object
    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.json_output = enabled;
        self
    }

    /// Get base URL for API
    fn base_url(&self) -> String {
        format!("{}/chat/completions", self.base)
    }
}

/// API request structure
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<LLMMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    stream: bool,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// API response structure
#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

/// Choice in response
#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

/// Response message
#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

/// Usage information
#[derive(Deserialize, Debug)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[async_trait]
impl LLM for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn chat(
        &self,
        messages: Vec<LLMMessage>,
        model: Option<&str>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse> {
        let model = model.unwrap_or(&self.model);

        let request = ChatRequest {
            model: model.to_string(),
            messages,
            temperature,
            max_tokens,
            response_format: self.json_output.then_some(ResponseFormat { kind: "json_object" }),
            stream: false,
        };

        let response = self.client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        let choice = chat_response.choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidRequest("No choices in response".to_string()))?;

        let usage = chat_response.usage.map(|u| LLMUsage {
            prompt_tokens: Some(u.prompt_tokens),
            completion_tokens: Some(u.completion_tokens),
            total_tokens: Some(u.total_tokens),
        });

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            model: model.to_string(),
            usage,
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
        })
    }

    #[tokio::test]
    async fn test_chat_sends_json_mode_and_reads_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"classification\":\"about\"}")))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::new("test-key", None)
            .with_base_url(server.uri())
            .with_json_output(true);

        let response = provider
            .chat(vec![LLMMessage::user("hi")], None, Some(0.0), None)
            .await
            .unwrap();

        assert_eq!(response.content, "{\"classification\":\"about\"}");
        assert_eq!(response.model, "gpt-4o-mini");
        assert_eq!(response.usage.unwrap().total_tokens, Some(20));
    }

    #[tokio::test]
    async fn test_chat_maps_429_to_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::groq("test-key", None).with_base_url(server.uri());
        let err = provider
            .chat(vec![LLMMessage::user("hi")], None, None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, LLMError::RateLimited));
        assert_eq!(provider.name(), "groq");
    }

    #[tokio::test]
    async fn test_chat_reports_api_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_api_key"))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::new("bad", None).with_base_url(server.uri());
        let err = provider
            .chat(vec![LLMMessage::user("hi")], None, None, None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("invalid_api_key"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_chat_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("{}"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let provider = OpenAiProvider::new("test-key", None)
            .with_base_url(server.uri())
            .with_timeout(Duration::from_secs(1));
        let err = provider
            .chat(vec![LLMMessage::user("hi")], None, None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, LLMError::Timeout), "got: {:?}", err);
    }
}
