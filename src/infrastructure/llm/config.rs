//! LLM Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-request limit for provider calls, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// LLM Provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    OpenAi,
    Groq,
    Gemini,
}

impl Default for LLMProvider {
    fn default() -> Self {
        Self::OpenAi
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "groq" => Ok(Self::Groq),
            "gemini" => Ok(Self::Gemini),
            other => Err(format!("unknown LLM provider: {}", other)),
        }
    }
}

/// LLM Configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LLMConfig {
    /// Default provider
    pub provider: LLMProvider,

    /// Provider-specific API keys
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub gemini_api_key: Option<String>,

    /// Default model for each provider
    pub openai_model: Option<String>,
    pub groq_model: Option<String>,
    pub gemini_model: Option<String>,

    /// Default settings
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::OpenAi,
            openai_api_key: None,
            groq_api_key: None,
            gemini_api_key: None,
            openai_model: Some("gpt-4o-mini".to_string()),
            groq_model: Some("llama-3.1-8b-instant".to_string()),
            gemini_model: Some("gemini-1.5-flash".to_string()),
            temperature: 0.0,
            max_tokens: Some(256),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LLMConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables onto this config
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.openai_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            self.groq_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }

        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            match provider.parse() {
                Ok(p) => self.provider = p,
                Err(e) => tracing::warn!("Ignoring LLM_PROVIDER: {}", e),
            }
        }

        if let Ok(temp) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(t) = temp.parse() {
                self.temperature = t;
            }
        }

        if let Ok(secs) = std::env::var("LLM_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring LLM_TIMEOUT_SECS={:?}", secs),
            }
        }
    }

    /// Get API key for a provider
    pub fn api_key(&self, provider: LLMProvider) -> Option<&str> {
        match provider {
            LLMProvider::OpenAi => self.openai_api_key.as_deref(),
            LLMProvider::Groq => self.groq_api_key.as_deref(),
            LLMProvider::Gemini => self.gemini_api_key.as_deref(),
        }
    }

    /// Get model for a provider
    pub fn model(&self, provider: LLMProvider) -> &str {
        match provider {
            LLMProvider::OpenAi => self.openai_model.as_deref().unwrap_or("gpt-4o-mini"),
            LLMProvider::Groq => self.groq_model.as_deref().unwrap_or("llama-3.1-8b-instant"),
            LLMProvider::Gemini => self.gemini_model.as_deref().unwrap_or("gemini-1.5-flash"),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
