//! File analysis: import/export extraction, complexity scoring and edge resolution

pub mod builder;
pub mod complexity;
pub mod error;
pub mod languages;
pub mod loader;
pub mod resolver;
pub mod source;
pub mod staging;

#[cfg(test)]
pub mod tests;

pub use builder::{analyze_file, build_graph};
pub use complexity::complexity_score;
pub use error::LoadError;
pub use languages::{Extraction, LanguageExtractor, extract_for, get_extractor};
pub use loader::load_paths;
pub use resolver::FileIndex;
pub use source::SourceFile;
pub use staging::StagingArea;
