//! btc-bot - Intent triage bot for BTC price questions
//!
//! Each inbound message is classified (keyword rules or an LLM), routed to
//! exactly one handler and answered with exactly one reply.

pub mod domain;
pub mod application;
pub mod infrastructure;
