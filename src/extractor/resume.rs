use crate::extractor::patterns;
use crate::models::{EducationEntry, ExperienceEntry, ParsedResume};
use crate::vocabulary::SkillVocabulary;

/// Which section of the resume the line scanner is currently inside. A line
/// belongs to exactly one section; header-keyword lines switch the state and
/// are consumed, never treated as content.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Experience,
    Education,
}

/// Heuristic resume parser. Total over all inputs: malformed text produces a
/// partial `ParsedResume`, never an error.
pub struct ResumeExtractor {
    vocabulary: SkillVocabulary,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: SkillVocabulary::new(),
        }
    }

    pub fn extract(&self, raw_text: &str) -> ParsedResume {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut parsed = ParsedResume::default();

        if let Some(m) = patterns::EMAIL.find(raw_text) {
            parsed.email = Some(m.as_str().to_string());
        }

        if let Some(m) = patterns::PHONE.find(raw_text) {
            parsed.phone = Some(m.as_str().to_string());
        }

        // Resumes conventionally open with the candidate's name. Reject the
        // first line if it is suspiciously long or looks like an address.
        if let Some(first) = lines.first() {
            if first.chars().count() < 50 && !first.contains('@') {
                parsed.name = Some(first.to_string());
            }
        }

        parsed.skills = self.vocabulary.find_in(raw_text);

        self.extract_sections(&lines, &mut parsed);

        if let Some(caps) = patterns::SUMMARY.captures(raw_text) {
            parsed.summary = Some(caps[1].trim().to_string());
        }

        parsed
    }

    /// Single forward pass over the lines, collecting experience and
    /// education entries.
    fn extract_sections(&self, lines: &[&str], parsed: &mut ParsedResume) {
        let mut section = Section::None;
        let mut current_exp: Option<ExperienceEntry> = None;
        let mut current_edu: Option<EducationEntry> = None;

        for line in lines {
            let line_lower = line.to_lowercase();

            if line_lower.contains("experience") || line_lower.contains("work history") {
                section = Section::Experience;
                continue;
            }
            if line_lower.contains("education") || line_lower.contains("academic") {
                section = Section::Education;
                continue;
            }
            if line_lower.contains("skills") || line_lower.contains("summary") {
                section = Section::None;
                continue;
            }

            match section {
                Section::Experience => {
                    Self::experience_line(line, &mut current_exp, &mut parsed.experience)
                }
                Section::Education => {
                    Self::education_line(line, &mut current_edu, &mut parsed.education)
                }
                Section::None => {}
            }
        }

        // Flush whatever was still being accumulated when the input ended.
        if let Some(entry) = current_exp {
            if entry.is_populated() {
                parsed.experience.push(entry);
            }
        }
        if let Some(entry) = current_edu {
            if entry.is_populated() {
                parsed.education.push(entry);
            }
        }
    }

    /// A line with a year token or longer than 20 chars starts a new entry;
    /// shorter lines (> 10 chars) extend the current entry's description.
    fn experience_line(
        line: &str,
        current: &mut Option<ExperienceEntry>,
        out: &mut Vec<ExperienceEntry>,
    ) {
        let has_year = patterns::YEAR.is_match(line);

        if has_year || line.chars().count() > 20 {
            if let Some(entry) = current.take() {
                if entry.is_populated() {
                    out.push(entry);
                }
            }

            let (title, company) = match line.split_once('-') {
                Some((before, after)) => (
                    non_empty(before.trim()),
                    non_empty(after.trim()),
                ),
                None => (Some(line.to_string()), None),
            };

            *current = Some(ExperienceEntry {
                title,
                company,
                duration: has_year.then(|| line.to_string()),
                description: String::new(),
            });
        } else if let Some(entry) = current.as_mut() {
            if line.chars().count() > 10 {
                if !entry.description.is_empty() {
                    entry.description.push(' ');
                }
                entry.description.push_str(line);
            }
        }
    }

    /// Same header logic with a 15-char threshold; continuation lines
    /// (> 5 chars) overwrite the institution, last write wins.
    fn education_line(
        line: &str,
        current: &mut Option<EducationEntry>,
        out: &mut Vec<EducationEntry>,
    ) {
        let year = patterns::YEAR.find(line);

        if year.is_some() || line.chars().count() > 15 {
            if let Some(entry) = current.take() {
                if entry.is_populated() {
                    out.push(entry);
                }
            }

            *current = Some(EducationEntry {
                degree: Some(line.to_string()),
                institution: None,
                year: year.map(|m| m.as_str().to_string()),
            });
        } else if let Some(entry) = current.as_mut() {
            if line.chars().count() > 5 {
                entry.institution = Some(line.to_string());
            }
        }
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
