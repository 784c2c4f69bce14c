use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

pub const EMPTY_KEYWORD_ERROR: &str = "Error: Keyword cannot be empty.";
pub const API_ERROR_MARKER: &str = "API Error";
pub const EXPECTED_VARIATIONS: usize = 5;

/// A trimmed, non-empty keyword line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Secret for the text-generation service. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Outcome of one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariationResult {
    /// Cleaned lines in model output order. Usually five, but never truncated or padded.
    Variations(Vec<String>),
    EmptyKeyword,
    ServiceFailure { keyword: String },
}

impl VariationResult {
    pub fn is_error(&self) -> bool {
        !matches!(self, VariationResult::Variations(_))
    }

    /// The error sentinel, if this is a failure.
    pub fn error_message(&self) -> Option<String> {
        match self {
            VariationResult::Variations(_) => None,
            VariationResult::EmptyKeyword => Some(EMPTY_KEYWORD_ERROR.to_string()),
            VariationResult::ServiceFailure { keyword } => {
                Some(format!("{} for keyword: '{}'", API_ERROR_MARKER, keyword))
            }
        }
    }

    /// Flattens into the plain list form: the variations, or a single sentinel string.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            VariationResult::Variations(lines) => lines,
            other => other.error_message().into_iter().collect(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.clone().into_lines()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub keyword: Keyword,
    pub result: VariationResult,
}

impl KeywordReport {
    pub fn new(keyword: Keyword, result: VariationResult) -> Self {
        Self { keyword, result }
    }

    pub fn variations(&self) -> Vec<String> {
        self.result.lines()
    }
}

impl Serialize for KeywordReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KeywordReport", 3)?;
        state.serialize_field("keyword", &self.keyword)?;
        state.serialize_field("error", &self.result.is_error())?;
        state.serialize_field("variations", &self.variations())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_parse_trims_and_rejects_blank() {
        assert_eq!(
            Keyword::parse("  Healthy breakfast ideas \t").unwrap().as_str(),
            "Healthy breakfast ideas"
        );
        assert!(Keyword::parse("").is_none());
        assert!(Keyword::parse("   ").is_none());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("AIza-secret-value").unwrap();
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("AIza"));
        assert_eq!(credential.expose(), "AIza-secret-value");
        assert!(Credential::new("  ").is_none());
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(
            VariationResult::EmptyKeyword.into_lines(),
            vec!["Error: Keyword cannot be empty.".to_string()]
        );
        let failure = VariationResult::ServiceFailure {
            keyword: "Beginner's guide to Python".to_string(),
        };
        assert_eq!(
            failure.into_lines(),
            vec!["API Error for keyword: 'Beginner's guide to Python'".to_string()]
        );
    }

    #[test]
    fn test_sentinels_are_detectable_by_substring() {
        let failure = VariationResult::ServiceFailure {
            keyword: "x".to_string(),
        };
        assert!(failure.into_lines()[0].contains(API_ERROR_MARKER));
        assert!(VariationResult::EmptyKeyword.into_lines()[0].contains("Error:"));
    }

    #[test]
    fn test_variations_pass_through() {
        let result = VariationResult::Variations(vec!["a".into(), "b".into()]);
        assert!(!result.is_error());
        assert_eq!(result.error_message(), None);
        assert_eq!(result.into_lines(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_report_serializes_list_form() {
        let report = KeywordReport::new(
            Keyword::parse("seo").unwrap(),
            VariationResult::ServiceFailure {
                keyword: "seo".to_string(),
            },
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "keyword": "seo",
                "error": true,
                "variations": ["API Error for keyword: 'seo'"]
            })
        );
    }
}
