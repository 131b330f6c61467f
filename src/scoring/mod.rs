pub mod answer;
pub mod aggregate;

pub use answer::{AnswerScorer, ScoringWeights};
pub use aggregate::{CategoryPolicy, InterviewAggregator};
