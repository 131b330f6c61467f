use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, loose enough for the address forms that show up in
/// resume headers.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").expect("email pattern")
});

/// Optional country code, optional parens around the area code, separators of
/// space/dot/hyphen: matches "+1 (555) 123-4567", "555.123.4567", etc.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});

/// A four-digit year in 1900-2099, used to spot experience/education headers.
pub static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern"));

/// "Summary:" (or "summary " etc.) followed by 50-500 chars up to a newline.
pub static SUMMARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)summary[:\s]+([^\n]{50,500})").expect("summary pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_matches_standard_address() {
        let m = EMAIL.find("Contact: jane@example.com for details").unwrap();
        assert_eq!(m.as_str(), "jane@example.com");
    }

    #[test]
    fn test_email_no_match_without_tld() {
        assert!(EMAIL.find("not-an-email@nowhere").is_none());
    }

    #[test]
    fn test_phone_formats() {
        for text in [
            "555-123-4567",
            "(555) 123-4567",
            "+1 555.123.4567",
            "5551234567",
        ] {
            assert!(PHONE.is_match(text), "expected match for {}", text);
        }
    }

    #[test]
    fn test_year_bounds() {
        assert!(YEAR.is_match("worked 2019 to 2021"));
        assert!(YEAR.is_match("class of 1998"));
        assert!(!YEAR.is_match("room 2150x"));
        assert!(!YEAR.is_match("1850"));
    }

    #[test]
    fn test_summary_requires_fifty_chars() {
        let text = "Summary: Seasoned backend engineer with a decade of experience in Rust.";
        let caps = SUMMARY.captures(text).unwrap();
        assert!(caps.get(1).unwrap().as_str().starts_with("Seasoned"));

        assert!(SUMMARY.captures("Summary: too short").is_none());
    }
}
