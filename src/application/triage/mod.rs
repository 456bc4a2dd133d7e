//! Intent triage - Classification policies behind the `Classifier` trait

pub mod keyword;
pub mod delegated;

pub use keyword::KeywordClassifier;
pub use delegated::LlmClassifier;
