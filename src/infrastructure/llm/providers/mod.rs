//! LLM Providers

pub mod openai;
pub mod gemini;

pub use openai::OpenAiProvider;
pub use gemini::GeminiProvider;
