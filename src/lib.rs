pub mod config;
pub mod error;
pub mod models;
pub mod vocabulary;
pub mod extractor;
pub mod scoring;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use extractor::ResumeExtractor;
pub use scoring::{AnswerScorer, CategoryPolicy, InterviewAggregator};
pub use storage::Storage;
