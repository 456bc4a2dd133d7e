use chrono::{DateTime, Utc};

/// A spot price, valid only for the reply it is formatted into
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub amount: f64,
    pub currency: String,
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            fetched_at: Utc::now(),
        }
    }

    /// `"{amount} {currency}"`, amount printed as the source reported it
    pub fn display_amount(&self) -> String {
        format!("{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_amount_keeps_fraction() {
        assert_eq!(PriceQuote::new(67000.5, "USDT").display_amount(), "67000.5 USDT");
    }

    #[test]
    fn test_display_amount_whole_number() {
        assert_eq!(PriceQuote::new(50000.0, "USDT").display_amount(), "50000 USDT");
    }
}
