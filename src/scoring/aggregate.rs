use std::collections::{BTreeMap, HashMap};

use crate::models::{InterviewResult, Question, QuestionCategory, QuestionResponse};

/// What to report for a category when several of its questions were answered.
///
/// `LastWriteWins` keeps only the last answered question's percentage (in
/// question order), matching the historical behavior downstream consumers see
/// today. `Average` is the corrected alternative; swapping the policy touches
/// nothing else in the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryPolicy {
    #[default]
    LastWriteWins,
    Average,
}

pub struct InterviewAggregator {
    policy: CategoryPolicy,
}

impl InterviewAggregator {
    pub fn new() -> Self {
        Self {
            policy: CategoryPolicy::default(),
        }
    }

    pub fn with_policy(policy: CategoryPolicy) -> Self {
        Self { policy }
    }

    /// Computes the final interview result from the full response set.
    ///
    /// The overall score is the matched response total over the maximum
    /// attainable across ALL questions, as a percentage; an empty question
    /// set yields 0. Categories with no answered question are omitted from
    /// the breakdown, not zero-filled.
    pub fn aggregate(
        &self,
        questions: &[Question],
        responses: &HashMap<String, QuestionResponse>,
    ) -> InterviewResult {
        let total_score: f64 = questions
            .iter()
            .filter_map(|q| responses.get(&q.id))
            .map(|r| r.score)
            .sum();
        let max_score: f64 = questions.iter().map(|q| q.max_score).sum();

        let overall_score = if max_score > 0.0 {
            100.0 * total_score / max_score
        } else {
            0.0
        };

        let scores_by_category = match self.policy {
            CategoryPolicy::LastWriteWins => self.last_write_wins(questions, responses),
            CategoryPolicy::Average => self.averaged(questions, responses),
        };

        InterviewResult {
            overall_score,
            scores_by_category,
        }
    }

    fn last_write_wins(
        &self,
        questions: &[Question],
        responses: &HashMap<String, QuestionResponse>,
    ) -> BTreeMap<QuestionCategory, f64> {
        let mut scores = BTreeMap::new();

        for question in questions {
            if let Some(response) = responses.get(&question.id) {
                scores.insert(question.category, 100.0 * response.score / question.max_score);
            }
        }

        scores
    }

    fn averaged(
        &self,
        questions: &[Question],
        responses: &HashMap<String, QuestionResponse>,
    ) -> BTreeMap<QuestionCategory, f64> {
        let mut sums: BTreeMap<QuestionCategory, (f64, u32)> = BTreeMap::new();

        for question in questions {
            if let Some(response) = responses.get(&question.id) {
                let entry = sums.entry(question.category).or_insert((0.0, 0));
                entry.0 += 100.0 * response.score / question.max_score;
                entry.1 += 1;
            }
        }

        sums.into_iter()
            .map(|(category, (sum, count))| (category, sum / count as f64))
            .collect()
    }
}

impl Default for InterviewAggregator {
    fn default() -> Self {
        Self::new()
    }
}
