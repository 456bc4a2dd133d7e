//! LLM integration - Multi-provider AI support

pub mod traits;
pub mod config;
pub mod providers;


use std::sync::Arc;

pub use traits::{LLM, LLMMessage, LLMResponse, LLMError, LLMResult, LLMUsage};
pub use config::{LLMConfig, LLMProvider};
pub use providers::{OpenAiProvider, GeminiProvider};

/// Build the configured provider, with JSON output and the request timeout set
pub fn build_provider(config: &LLMConfig) -> LLMResult<Arc<dyn LLM>> {
    let provider = config.provider;
    let api_key = config.api_key(provider).ok_or(LLMError::MissingApiKey)?;
    let model = Some(config.model(provider));

    if config.timeout_secs == 0 {
        return Err(LLMError::ConfigError("timeout-secs must be greater than 0".to_string()));
    }
    let timeout = config.timeout();

    let llm: Arc<dyn LLM> = match provider {
        LLMProvider::OpenAi => Arc::new(
            OpenAiProvider::new(api_key, model).with_json_output(true).with_timeout(timeout),
        ),
        LLMProvider::Groq => Arc::new(
            OpenAiProvider::groq(api_key, model).with_json_output(true).with_timeout(timeout),
        ),
        LLMProvider::Gemini => Arc::new(
            GeminiProvider::new(api_key, model).with_json_output(true).with_timeout(timeout),
        ),
    };

    tracing::info!("Using {} ({}) for intent classification", llm.name(), config.model(provider));
    Ok(llm)
}
