//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;
use crate::infrastructure::llm::LLMConfig;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub price: PriceConfig,
    pub classifier: ClassifierConfig,
    pub llm: LLMConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "btc-bot".to_string(),
            prefix: "/".to_string(),
        }
    }
}

/// Quote endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PriceConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Currency label shown next to the amount
    pub currency: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.coinpaprika.com/v1/tickers/btc-bitcoin".to_string(),
            timeout_secs: 10,
            currency: "USDT".to_string(),
        }
    }
}

impl PriceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Which classification policy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierPolicy {
    #[default]
    Keyword,
    Llm,
}

impl std::str::FromStr for ClassifierPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "llm" => Ok(Self::Llm),
            other => Err(ConfigError::InvalidValue(format!("classifier policy: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClassifierConfig {
    pub policy: ClassifierPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self {
            telegram: Some(TelegramConfig {
                enabled: false,
                token: None,
            }),
            console: Some(ConsoleConfig { enabled: true }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

/// Transport picked for `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport<'a> {
    Telegram { token: &'a str },
    Console,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables on top of file or default values
    pub fn apply_env(&mut self) {
        let token = std::env::var("TELEGRAM_TOKEN").or_else(|_| std::env::var("BOT_TOKEN"));
        if let Ok(token) = token {
            self.set_telegram_token(token);
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Ok(endpoint) = std::env::var("PRICE_ENDPOINT") {
            self.price.endpoint = endpoint;
        }

        if let Ok(secs) = std::env::var("PRICE_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.price.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring PRICE_TIMEOUT_SECS={:?}", secs),
            }
        }

        if let Ok(policy) = std::env::var("CLASSIFIER_POLICY") {
            match policy.parse() {
                Ok(policy) => self.classifier.policy = policy,
                Err(e) => tracing::warn!("Ignoring CLASSIFIER_POLICY: {}", e),
            }
        }

        self.llm.apply_env();
    }

    pub fn set_telegram_token(&mut self, token: String) {
        self.adapters.telegram = Some(TelegramConfig {
            enabled: true,
            token: Some(token),
        });
    }

    /// Telegram token, if the adapter is enabled
    pub fn telegram_token(&self) -> Option<&str> {
        self.adapters.telegram
            .as_ref()
            .filter(|t| t.enabled)
            .and_then(|t| t.token.as_deref())
    }

    pub fn console_enabled(&self) -> bool {
        self.adapters.console.as_ref().is_some_and(|c| c.enabled)
    }

    /// Telegram when a token is configured, otherwise the console if enabled
    pub fn transport(&self) -> Result<Transport<'_>, ConfigError> {
        if let Some(token) = self.telegram_token() {
            return Ok(Transport::Telegram { token });
        }
        if self.console_enabled() {
            return Ok(Transport::Console);
        }
        Err(ConfigError::MissingField(
            "adapters: no Telegram token set and console disabled".to_string(),
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("price.endpoint".to_string()));
        }

        if self.price.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("price.timeout-secs must be greater than 0".to_string()));
        }

        if self.classifier.policy == ClassifierPolicy::Llm && self.llm.api_key(self.llm.provider).is_none() {
            return Err(ConfigError::MissingField(format!(
                "API key for LLM provider {:?}",
                self.llm.provider
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.price.timeout(), Duration::from_secs(10));
        assert_eq!(config.classifier.policy, ClassifierPolicy::Keyword);
        assert!(config.telegram_token().is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
price:
  endpoint: "http://localhost:9000/ticker"
  timeout-secs: 3
  currency: "USD"
classifier:
  policy: llm
llm:
  provider: gemini
  gemini-api-key: "g-key"
  temperature: 0.0
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.price.timeout_secs, 3);
        assert_eq!(config.classifier.policy, ClassifierPolicy::Llm);
        assert_eq!(config.bot.prefix, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_llm_policy_without_key_rejected() {
        let mut config = Config::default();
        config.classifier.policy = ClassifierPolicy::Llm;
        config.llm.openai_api_key = None;

        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.price.timeout_secs = 0;

        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_telegram_token_enables_adapter() {
        let mut config = Config::default();
        config.set_telegram_token("123:abc".to_string());

        assert_eq!(config.telegram_token(), Some("123:abc"));
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config = Config::from_yaml("classifier: {}\nadapters: {}\n").unwrap();

        assert_eq!(config.classifier.policy, ClassifierPolicy::Keyword);
        assert_eq!(config.transport().unwrap(), Transport::Console);
    }

    #[test]
    fn test_transport_prefers_telegram() {
        let mut config = Config::default();
        config.set_telegram_token("123:abc".to_string());

        assert_eq!(config.transport().unwrap(), Transport::Telegram { token: "123:abc" });
    }

    #[test]
    fn test_disabled_console_without_token_has_no_transport() {
        let yaml = r#"
adapters:
  console:
    enabled: false
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert!(!config.console_enabled());
        assert!(matches!(config.transport(), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("LLM".parse::<ClassifierPolicy>().unwrap(), ClassifierPolicy::Llm);
        assert!("regex".parse::<ClassifierPolicy>().is_err());
    }
}
