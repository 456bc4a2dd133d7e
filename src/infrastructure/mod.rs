//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - LLM: Model providers for delegated classification
//! - Pricing: BTC quote lookup
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod llm;
pub mod pricing;
pub mod adapters;
