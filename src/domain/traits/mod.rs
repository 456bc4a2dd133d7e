//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod classifier;
pub mod price;

pub use bot::{Bot, BotInfo};
pub use classifier::Classifier;
pub use price::PriceFetcher;
