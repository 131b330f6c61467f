use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::question::QuestionCategory;

/// One submitted answer with its derived score. Resubmitting the same
/// question replaces the stored row (upsert, last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: String,
    pub answer_text: String,
    pub score: f64,
}

/// The slice of a stored answer the aggregator needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewResult {
    pub overall_score: f64,
    pub scores_by_category: BTreeMap<QuestionCategory, f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    Completed,
}

impl std::fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterviewStatus::InProgress => write!(f, "in_progress"),
            InterviewStatus::Completed => write!(f, "completed"),
        }
    }
}
