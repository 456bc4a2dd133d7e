//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The platform could not render the message markup
    #[error("Markup rejected: {0}")]
    MarkupRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Price lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Response was fine but carried no usable price
    #[error("Price unavailable")]
    PriceUnavailable,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Short tag that is safe to show to end users
    pub fn tag(&self) -> String {
        match self {
            FetchError::PriceUnavailable => "unavailable".to_string(),
            FetchError::Transport(_) => "network".to_string(),
            FetchError::Status(code) => format!("http-{}", code),
            FetchError::Malformed(_) => "bad-response".to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchError::PriceUnavailable)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_tags_hide_details() {
        let err = FetchError::Transport("dns error: api.coinpaprika.com".to_string());
        assert_eq!(err.tag(), "network");
        assert_eq!(FetchError::Status(503).tag(), "http-503");
        assert_eq!(FetchError::Malformed("eof".to_string()).tag(), "bad-response");
    }

    #[test]
    fn test_config_error_converts_into_bot_error() {
        let err: BotError = ConfigError::MissingField("price.endpoint".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: Missing required field: price.endpoint");
    }
}
