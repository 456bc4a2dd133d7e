//! Intent router - Fixed, exhaustive intent to handler table

use std::sync::Arc;

use crate::domain::entities::Intent;
use crate::domain::traits::PriceFetcher;
use super::handlers::{AboutHandler, BtcPriceHandler, Handler, IgnoreHandler};

pub struct Router {
    price: BtcPriceHandler,
    about: AboutHandler,
    ignore: IgnoreHandler,
}

impl Router {
    pub fn new(fetcher: Arc<dyn PriceFetcher>) -> Self {
        Self {
            price: BtcPriceHandler::new(fetcher),
            about: AboutHandler,
            ignore: IgnoreHandler,
        }
    }

    /// Handler for an intent. The match has no wildcard arm, so a new
    /// `Intent` variant fails to compile until it is routed here.
    pub fn route(&self, intent: Intent) -> &dyn Handler {
        match intent {
            Intent::PriceQuery => &self.price,
            Intent::AboutQuery => &self.about,
            Intent::Ignore => &self.ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::application::errors::FetchError;
    use crate::domain::entities::PriceQuote;

    struct NoFetch;

    #[async_trait]
    impl PriceFetcher for NoFetch {
        async fn fetch_price(&self) -> Result<PriceQuote, FetchError> {
            Err(FetchError::PriceUnavailable)
        }
    }

    #[test]
    fn test_every_intent_has_its_own_handler() {
        let router = Router::new(Arc::new(NoFetch));

        let names: Vec<&str> = Intent::ALL.iter().map(|i| router.route(*i).name()).collect();
        assert_eq!(names, vec!["btc_price", "about", "ignore"]);
    }

    #[test]
    fn test_handler_name_matches_intent_label() {
        let router = Router::new(Arc::new(NoFetch));
        for intent in Intent::ALL {
            assert_eq!(router.route(intent).name(), intent.label());
        }
    }
}
