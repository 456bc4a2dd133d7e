use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    PriceQuery,
    AboutQuery,
    Ignore,
}

impl Intent {
    /// Every intent, in routing order
    pub const ALL: [Intent; 3] = [Intent::PriceQuery, Intent::AboutQuery, Intent::Ignore];

    /// Label used by the classification model
    pub fn label(&self) -> &'static str {
        match self {
            Intent::PriceQuery => "btc_price",
            Intent::AboutQuery => "about",
            Intent::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown intent label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for Intent {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "btc_price" => Ok(Intent::PriceQuery),
            "about" => Ok(Intent::AboutQuery),
            "ignore" => Ok(Intent::Ignore),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub intent: Intent,
    /// Diagnostics only, never shown to the user
    pub rationale: Option<String>,
}

impl ClassificationResult {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            rationale: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Fallback used whenever classification cannot be trusted
    pub fn ignore(diagnostic: impl Into<String>) -> Self {
        Self::new(Intent::Ignore).with_rationale(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for intent in Intent::ALL {
            assert_eq!(intent.label().parse::<Intent>(), Ok(intent));
        }
    }

    #[test]
    fn test_label_parse_is_lenient_on_case_and_space() {
        assert_eq!(" BTC_Price\n".parse::<Intent>(), Ok(Intent::PriceQuery));
        assert_eq!("About".parse::<Intent>(), Ok(Intent::AboutQuery));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "weather".parse::<Intent>().unwrap_err();
        assert_eq!(err, UnknownLabel("weather".to_string()));
        assert_eq!(err.to_string(), "unknown intent label: \"weather\"");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_ignore_fallback_keeps_diagnostic() {
        let result = ClassificationResult::ignore("timeout");
        assert_eq!(result.intent, Intent::Ignore);
        assert_eq!(result.rationale.as_deref(), Some("timeout"));
    }
}
