//! Reply handlers - one per intent, each always yields a reply

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{InboundMessage, Reply};
use crate::domain::traits::PriceFetcher;

pub const PRICE_UNAVAILABLE_REPLY: &str =
    "⚠️ No pude obtener el precio en este momento. Por favor intenta más tarde.";

pub const ABOUT_REPLY: &str = "👋 Soy un bot de cotización de criptomonedas.\n\
Puedo consultar datos reales, como el precio del Bitcoin, y responderte en lenguaje natural.\n\
Pregúntame: '¿Cuál es el precio del BTC/USDT?'";

pub const IGNORE_REPLY: &str = "🤖 No entiendo tu solicitud. Puedes preguntarme cosas como:\n\
• '¿Cuál es el precio del BTC/USDT?'\n\
• '¿Qué hace este bot?'";

pub const GREETING_REPLY: &str = "¡Hola! Soy tu bot de criptomonedas 🤖\n\n\
Puedo decirte el precio actual de *Bitcoin (BTC/USDT)* o contarte qué hago.\n\
Prueba escribiendo: '¿Cuál es el precio del BTC/USDT?'";

/// Produces the reply for one message
#[async_trait]
pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(&self, message: &InboundMessage) -> Reply;
}

/// Answers price queries with a live quote
pub struct BtcPriceHandler {
    fetcher: Arc<dyn PriceFetcher>,
}

impl BtcPriceHandler {
    pub fn new(fetcher: Arc<dyn PriceFetcher>) -> Self {
        Self { fetcher }
    }

    /// Error reply; only the short tag reaches the user
    pub fn error_reply(tag: &str) -> String {
        format!(
            "❌ Ocurrió un error al consultar el precio. Por favor intenta más tarde. (código: {})",
            tag
        )
    }
}

#[async_trait]
impl Handler for BtcPriceHandler {
    fn name(&self) -> &'static str {
        "btc_price"
    }

    async fn handle(&self, message: &InboundMessage) -> Reply {
        match self.fetcher.fetch_price().await {
            Ok(quote) => Reply::markdown(format!(
                "💰 El precio actual de *Bitcoin (BTC/USDT)* es *{}*.",
                quote.display_amount()
            )),
            Err(e) if e.is_unavailable() => {
                tracing::warn!("[{}] Price unavailable", message.chat_id);
                Reply::markdown(PRICE_UNAVAILABLE_REPLY)
            }
            Err(e) => {
                tracing::warn!("[{}] Price lookup failed: {}", message.chat_id, e);
                Reply::plain(Self::error_reply(&e.tag()))
            }
        }
    }
}

/// Describes the bot
#[derive(Debug, Default)]
pub struct AboutHandler;

#[async_trait]
impl Handler for AboutHandler {
    fn name(&self) -> &'static str {
        "about"
    }

    async fn handle(&self, _message: &InboundMessage) -> Reply {
        Reply::markdown(ABOUT_REPLY)
    }
}

/// Fallback for anything the bot does not understand
#[derive(Debug, Default)]
pub struct IgnoreHandler;

#[async_trait]
impl Handler for IgnoreHandler {
    fn name(&self) -> &'static str {
        "ignore"
    }

    async fn handle(&self, _message: &InboundMessage) -> Reply {
        Reply::markdown(IGNORE_REPLY)
    }
}

/// `/start` and `/help`
#[derive(Debug, Default)]
pub struct GreetingHandler;

#[async_trait]
impl Handler for GreetingHandler {
    fn name(&self) -> &'static str {
        "greeting"
    }

    async fn handle(&self, _message: &InboundMessage) -> Reply {
        Reply::markdown(GREETING_REPLY)
    }
}
