//! AI bridge for Cartographer
//!
//! Natural-language summaries of uploaded files, with a templated
//! fallback whenever the generative-text API cannot be reached.

pub mod bridge;
pub mod cache;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod providers;
pub mod sections;
pub mod summarizer;


pub use bridge::*;
pub use cache::SummaryCache;
pub use error::AiError;
pub use fallback::basic_summary;
pub use sections::SummarySections;
pub use summarizer::Summarizer;
