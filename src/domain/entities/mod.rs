//! Domain entities - Core business objects with no external dependencies

pub mod intent;
pub mod message;
pub mod quote;

pub use intent::{ClassificationResult, Intent, UnknownLabel};
pub use message::{Content, InboundMessage, Reply, ReplyFormat};
pub use quote::PriceQuote;
