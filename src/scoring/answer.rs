use crate::models::Question;

pub struct AnswerScorer {
    weights: ScoringWeights,
}

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Answers longer than this many characters earn the length bonus.
    pub length_bonus_threshold: usize,
    /// Bonus as a fraction of the question's max score.
    pub length_bonus_fraction: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length_bonus_threshold: 50,
            length_bonus_fraction: 0.1,
        }
    }
}

impl AnswerScorer {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Scores a free-text answer against the question's expected keywords.
    ///
    /// Pure function of its two arguments, so caller-side last-write-wins
    /// upserts stay well-defined. The result is in `[0, question.max_score]`:
    /// keyword hit ratio times max score, plus the length bonus, clamped at
    /// the maximum. A question with no keywords scores 0; callers are
    /// expected to reject those via `Question::validate` beforehand.
    pub fn score(&self, answer_text: &str, question: &Question) -> f64 {
        if question.expected_keywords.is_empty() {
            return 0.0;
        }

        let answer_lower = answer_text.to_lowercase();
        let keywords_found = question
            .expected_keywords
            .iter()
            .filter(|keyword| answer_lower.contains(&keyword.to_lowercase()))
            .count();

        let ratio = keywords_found as f64 / question.expected_keywords.len() as f64;
        let base_score = ratio * question.max_score;

        let length_bonus = if answer_text.chars().count() > self.weights.length_bonus_threshold {
            question.max_score * self.weights.length_bonus_fraction
        } else {
            0.0
        };

        question.max_score.min(base_score + length_bonus)
    }
}

impl Default for AnswerScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionCategory};

    fn question(keywords: &[&str], max_score: f64) -> Question {
        Question {
            id: "q1".to_string(),
            category: QuestionCategory::Coding,
            difficulty: Difficulty::Medium,
            question_text: "Explain how you would iterate over a collection.".to_string(),
            expected_keywords: keywords.iter().map(|s| s.to_string()).collect(),
            max_score,
        }
    }

    #[test]
    fn test_score_within_bounds() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        for answer in [
            "",
            "I would use a loop",
            "A loop over the array is the straightforward approach, iterating each element once.",
        ] {
            let score = scorer.score(answer, &q);
            assert!((0.0..=10.0).contains(&score), "score {} out of bounds", score);
        }
    }

    #[test]
    fn test_no_keywords_short_answer_scores_zero() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        assert_eq!(scorer.score("I don't know", &q), 0.0);
    }

    #[test]
    fn test_all_keywords_long_answer_scores_max() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        // Ratio 1.0 plus the length bonus, clamped back down to max_score.
        let answer = "I would write a loop over the array and process every element in order until done.";
        assert!(answer.chars().count() > 50);
        assert_eq!(scorer.score(answer, &q), 10.0);
    }

    #[test]
    fn test_partial_keywords() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        assert_eq!(scorer.score("use a loop", &q), 5.0);
    }

    #[test]
    fn test_length_bonus_applied_below_cap() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        // One of two keywords plus the bonus: 5.0 + 1.0.
        let answer = "I would reach for a loop here and keep the body of it as small as possible.";
        assert!(answer.chars().count() > 50);
        assert_eq!(scorer.score(answer, &q), 6.0);
    }

    #[test]
    fn test_keyword_matching_case_insensitive() {
        let scorer = AnswerScorer::new();
        let q = question(&["Loop"], 10.0);

        assert_eq!(scorer.score("LOOP it", &q), 10.0);
    }

    #[test]
    fn test_repeated_keyword_counted_once() {
        let scorer = AnswerScorer::new();
        let q = question(&["loop", "array"], 10.0);

        assert_eq!(scorer.score("loop loop loop", &q), 5.0);
    }

    #[test]
    fn test_empty_keywords_scores_zero() {
        let scorer = AnswerScorer::new();
        let q = question(&[], 10.0);

        let long_answer = "a".repeat(80);
        assert_eq!(scorer.score(&long_answer, &q), 0.0);
    }
}
