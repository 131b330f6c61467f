use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{InterviewResult, InterviewStatus, ParsedResume, QuestionResponse, ScoredAnswer};

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    fn init_db(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS resumes (
                id TEXT PRIMARY KEY,
                file_name TEXT,
                parsed_json TEXT NOT NULL,
                uploaded_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS interviews (
                id TEXT PRIMARY KEY,
                status TEXT NOT NULL,
                overall_score REAL,
                scores_json TEXT,
                completed_at TEXT
            );

            CREATE TABLE IF NOT EXISTS interview_responses (
                id INTEGER PRIMARY KEY,
                interview_id TEXT NOT NULL REFERENCES interviews(id),
                question_id TEXT NOT NULL,
                answer_text TEXT NOT NULL,
                score REAL NOT NULL,
                UNIQUE(interview_id, question_id)
            );

            CREATE INDEX IF NOT EXISTS idx_responses_interview_id
                ON interview_responses(interview_id);
            "#,
        )?;

        Ok(())
    }

    pub fn save_resume(
        &self,
        resume_id: &str,
        file_name: Option<&str>,
        parsed: &ParsedResume,
    ) -> Result<()> {
        let parsed_json = serde_json::to_string(parsed)?;

        self.conn.execute(
            r#"
            INSERT INTO resumes (id, file_name, parsed_json, uploaded_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                file_name = excluded.file_name,
                parsed_json = excluded.parsed_json,
                uploaded_at = excluded.uploaded_at
            "#,
            params![
                resume_id,
                file_name,
                parsed_json,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    pub fn get_resume(&self, resume_id: &str) -> Result<Option<ParsedResume>> {
        let result = self.conn.query_row(
            "SELECT parsed_json FROM resumes WHERE id = ?1",
            params![resume_id],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(parsed_json) => Ok(Some(serde_json::from_str(&parsed_json)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn start_interview(&self, interview_id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO interviews (id, status) VALUES (?1, ?2)",
            params![interview_id, InterviewStatus::InProgress.to_string()],
        )?;

        Ok(())
    }

    /// Stores one answer, keyed by interview and question. Resubmitting the
    /// same question replaces the row: last write wins.
    pub fn save_answer(&self, interview_id: &str, answer: &ScoredAnswer) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO interview_responses (interview_id, question_id, answer_text, score)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(interview_id, question_id) DO UPDATE SET
                answer_text = excluded.answer_text,
                score = excluded.score
            "#,
            params![
                interview_id,
                answer.question_id,
                answer.answer_text,
                answer.score,
            ],
        )?;

        Ok(())
    }

    pub fn get_responses(&self, interview_id: &str) -> Result<HashMap<String, QuestionResponse>> {
        let mut stmt = self.conn.prepare(
            "SELECT question_id, score FROM interview_responses WHERE interview_id = ?1",
        )?;

        let rows = stmt.query_map(params![interview_id], |row| {
            let question_id: String = row.get(0)?;
            let score: f64 = row.get(1)?;
            Ok((
                question_id.clone(),
                QuestionResponse { question_id, score },
            ))
        })?;

        rows.collect::<std::result::Result<HashMap<_, _>, _>>()
            .map_err(Into::into)
    }

    pub fn complete_interview(
        &self,
        interview_id: &str,
        result: &InterviewResult,
    ) -> Result<()> {
        let scores_json = serde_json::to_string(&result.scores_by_category)?;

        let updated = self.conn.execute(
            r#"
            UPDATE interviews
            SET status = ?2, overall_score = ?3, scores_json = ?4, completed_at = ?5
            WHERE id = ?1
            "#,
            params![
                interview_id,
                InterviewStatus::Completed.to_string(),
                result.overall_score,
                scores_json,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;

        if updated == 0 {
            return Err(Error::InterviewNotFound(interview_id.to_string()));
        }

        Ok(())
    }

    pub fn get_result(&self, interview_id: &str) -> Result<Option<InterviewResult>> {
        let result = self.conn.query_row(
            "SELECT overall_score, scores_json FROM interviews WHERE id = ?1 AND status = ?2",
            params![interview_id, InterviewStatus::Completed.to_string()],
            |row| {
                Ok((
                    row.get::<_, f64>(0)?,
                    row.get::<_, String>(1)?,
                ))
            },
        );

        match result {
            Ok((overall_score, scores_json)) => Ok(Some(InterviewResult {
                overall_score,
                scores_by_category: serde_json::from_str(&scores_json)?,
            })),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionCategory;
    use std::collections::BTreeMap;

    #[test]
    fn test_resume_roundtrip() {
        let storage = Storage::in_memory().unwrap();
        let parsed = ParsedResume {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            skills: vec!["Python".to_string()],
            ..Default::default()
        };

        storage.save_resume("r1", Some("resume.txt"), &parsed).unwrap();
        let loaded = storage.get_resume("r1").unwrap().unwrap();
        assert_eq!(loaded, parsed);
    }

    #[test]
    fn test_missing_resume_is_none() {
        let storage = Storage::in_memory().unwrap();
        assert!(storage.get_resume("nope").unwrap().is_none());
    }

    #[test]
    fn test_answer_upsert_last_write_wins() {
        let storage = Storage::in_memory().unwrap();
        storage.start_interview("i1").unwrap();

        for (text, score) in [("first try", 3.0), ("second try", 8.0)] {
            storage
                .save_answer(
                    "i1",
                    &ScoredAnswer {
                        question_id: "q1".to_string(),
                        answer_text: text.to_string(),
                        score,
                    },
                )
                .unwrap();
        }

        let responses = storage.get_responses("i1").unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses["q1"].score, 8.0);
    }

    #[test]
    fn test_complete_and_fetch_result() {
        let storage = Storage::in_memory().unwrap();
        storage.start_interview("i1").unwrap();

        let mut scores_by_category = BTreeMap::new();
        scores_by_category.insert(QuestionCategory::Coding, 70.0);
        let result = InterviewResult {
            overall_score: 70.0,
            scores_by_category,
        };

        // Not completed yet, so no result visible.
        assert!(storage.get_result("i1").unwrap().is_none());

        storage.complete_interview("i1", &result).unwrap();
        let loaded = storage.get_result("i1").unwrap().unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn test_complete_unknown_interview_fails() {
        let storage = Storage::in_memory().unwrap();
        let result = InterviewResult {
            overall_score: 0.0,
            scores_by_category: BTreeMap::new(),
        };

        assert!(matches!(
            storage.complete_interview("ghost", &result),
            Err(Error::InterviewNotFound(_))
        ));
    }
}
