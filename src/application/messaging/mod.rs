//! Message handling - Classify, route and answer inbound messages

pub mod dispatcher;
pub mod handlers;
pub mod parser;
pub mod router;

pub use dispatcher::MessageDispatcher;
pub use handlers::{AboutHandler, BtcPriceHandler, GreetingHandler, Handler, IgnoreHandler};
pub use parser::MessageParser;
pub use router::Router;
