/// Fixed vocabulary of skill tokens recognized in resume text.
///
/// Extraction is plain case-insensitive substring containment over the full
/// text, so tokens are stored as lowercase canonical forms. Extending the
/// vocabulary means adding a token here; the extraction logic never changes.
pub struct SkillVocabulary {
    tokens: Vec<&'static str>,
}

impl SkillVocabulary {
    pub fn new() -> Self {
        let mut vocabulary = Self { tokens: Vec::new() };

        vocabulary.init_languages();
        vocabulary.init_frameworks();
        vocabulary.init_data_stores();
        vocabulary.init_infrastructure();
        vocabulary.init_web();
        vocabulary.init_practices();
        vocabulary.init_ml();

        vocabulary
    }

    fn init_languages(&mut self) {
        self.tokens.extend([
            "javascript",
            "typescript",
            "python",
            "java",
            "c++",
            "c#",
            "ruby",
            "php",
            "swift",
            "kotlin",
        ]);
    }

    fn init_frameworks(&mut self) {
        self.tokens.extend([
            "react", "angular", "vue", "node", "express", "django", "flask", "spring", "laravel",
        ]);
    }

    fn init_data_stores(&mut self) {
        self.tokens.extend([
            "sql",
            "nosql",
            "mongodb",
            "postgresql",
            "mysql",
            "redis",
            "elasticsearch",
        ]);
    }

    fn init_infrastructure(&mut self) {
        self.tokens.extend([
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "jenkins",
            "git",
            "ci/cd",
        ]);
    }

    fn init_web(&mut self) {
        self.tokens.extend([
            "html",
            "css",
            "sass",
            "tailwind",
            "bootstrap",
            "webpack",
            "vite",
            "rest",
            "graphql",
            "api",
        ]);
    }

    fn init_practices(&mut self) {
        self.tokens.extend(["microservices", "agile", "scrum"]);
    }

    fn init_ml(&mut self) {
        self.tokens.extend([
            "machine learning",
            "ai",
            "data science",
            "tensorflow",
            "pytorch",
        ]);
    }

    /// Returns every vocabulary token found in `text`, rendered with the
    /// first character capitalized. Each token appears at most once no matter
    /// how often (or in which casing) it occurs in the text.
    pub fn find_in(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();

        self.tokens
            .iter()
            .filter(|token| text_lower.contains(*token))
            .map(|token| capitalize_first(token))
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_skills_case_insensitive() {
        let vocab = SkillVocabulary::new();
        let skills = vocab.find_in("Expert in JAVASCRIPT and Docker");
        assert!(skills.contains(&"Javascript".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_find_deduplicates_case_variants() {
        let vocab = SkillVocabulary::new();
        let skills = vocab.find_in("javascript and JavaScript");
        let js_count = skills.iter().filter(|s| *s == "Javascript").count();
        assert_eq!(js_count, 1);
    }

    #[test]
    fn test_multi_word_and_symbol_tokens() {
        let vocab = SkillVocabulary::new();
        let skills = vocab.find_in("Built C++ services and machine learning pipelines with CI/CD");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"Machine learning".to_string()));
        assert!(skills.contains(&"Ci/cd".to_string()));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let vocab = SkillVocabulary::new();
        assert!(vocab.find_in("I enjoy gardening").is_empty());
    }
}
