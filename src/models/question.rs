use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Interview question definition. Defined externally as static data; the
/// wire names (snake_case categories, lowercase difficulties) are part of the
/// external schema and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
    pub question_text: String,
    pub expected_keywords: Vec<String>,
    pub max_score: f64,
}

impl Question {
    /// Scoring is only meaningful for questions with keywords and a positive
    /// maximum; callers reject anything else before it reaches the scorer.
    pub fn validate(&self) -> Result<()> {
        if self.expected_keywords.is_empty() {
            return Err(Error::InvalidQuestion {
                id: self.id.clone(),
                reason: "expected_keywords must not be empty".to_string(),
            });
        }
        if self.max_score <= 0.0 {
            return Err(Error::InvalidQuestion {
                id: self.id.clone(),
                reason: format!("max_score must be positive, got {}", self.max_score),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Introduction,
    Behavioral,
    Coding,
    SoftSkills,
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionCategory::Introduction => write!(f, "introduction"),
            QuestionCategory::Behavioral => write!(f, "behavioral"),
            QuestionCategory::Coding => write!(f, "coding"),
            QuestionCategory::SoftSkills => write!(f, "soft_skills"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(keywords: &[&str], max_score: f64) -> Question {
        Question {
            id: "q1".to_string(),
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Medium,
            question_text: "Describe a loop.".to_string(),
            expected_keywords: keywords.iter().map(|s| s.to_string()).collect(),
            max_score,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_question() {
        assert!(question(&["loop"], 10.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_keywords() {
        assert!(question(&[], 10.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_max_score() {
        assert!(question(&["loop"], 0.0).validate().is_err());
        assert!(question(&["loop"], -1.0).validate().is_err());
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&QuestionCategory::SoftSkills).unwrap();
        assert_eq!(json, "\"soft_skills\"");
        let back: QuestionCategory = serde_json::from_str("\"behavioral\"").unwrap();
        assert_eq!(back, QuestionCategory::Behavioral);
    }
}
