//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Intent, InboundMessage, Reply, PriceQuote)
//! - Traits: Capabilities the dispatch core depends on (Classifier, PriceFetcher, Bot)

pub mod entities;
pub mod traits;
