//! Message dispatcher - Classify, route, reply

use std::sync::Arc;

use crate::domain::entities::{Content, InboundMessage, Intent, Reply};
use crate::domain::traits::{Classifier, PriceFetcher};
use super::handlers::{GreetingHandler, Handler};
use super::parser::MessageParser;
use super::router::Router;

/// Entry point for one inbound message.
///
/// Holds no per-message state, so one dispatcher can serve concurrent
/// messages behind an `Arc`.
pub struct MessageDispatcher {
    parser: MessageParser,
    classifier: Arc<dyn Classifier>,
    router: Router,
    greeting: GreetingHandler,
}

impl MessageDispatcher {
    pub fn new(prefix: impl Into<String>, classifier: Arc<dyn Classifier>, fetcher: Arc<dyn PriceFetcher>) -> Self {
        Self {
            parser: MessageParser::new(prefix),
            classifier,
            router: Router::new(fetcher),
            greeting: GreetingHandler,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Process a raw text message
    pub async fn process_text(&self, chat_id: impl Into<String>, sender_id: impl Into<String>, text: impl Into<String>) -> Reply {
        let message = self.parser.parse(chat_id, sender_id, text);
        self.process(&message).await
    }

    /// Produce exactly one reply for a message
    pub async fn process(&self, message: &InboundMessage) -> Reply {
        let preview: String = message.text.chars().take(50).collect();
        tracing::debug!("[{}] {}", message.chat_id, preview);

        let handler: &dyn Handler = match &message.content {
            Content::Command { name, .. } if name == "start" || name == "help" => &self.greeting,
            Content::Command { name, .. } => {
                tracing::debug!("[{}] Unknown command /{}", message.chat_id, name);
                self.router.route(Intent::Ignore)
            }
            Content::Text(text) => {
                let classification = self.classifier.classify(text).await;
                tracing::info!(
                    "[{}] {} classifier -> {}",
                    message.chat_id,
                    self.classifier.name(),
                    classification.intent
                );
                if let Some(rationale) = &classification.rationale {
                    tracing::debug!("[{}] Rationale: {}", message.chat_id, rationale);
                }
                self.router.route(classification.intent)
            }
        };

        let reply = handler.handle(message).await;
        tracing::debug!("[{}] Replied via {} handler", message.chat_id, handler.name());
        reply
    }
}
