//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Triage: Intent classification policies
//! - Messaging: Message parsing, handlers, routing, dispatching

pub mod errors;
pub mod messaging;
pub mod triage;
