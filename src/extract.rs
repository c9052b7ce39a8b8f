use crate::error::AnalyzeError;
use regex::Regex;

/// Default line pattern: the `filter="..."` attribute of a search request.
pub const DEFAULT_FILTER_PATTERN: &str = r#"filter="([^"]+)""#;

/// Pulls the raw search filter out of an access log line.
///
/// Capture group 1 of the pattern is the filter text. Only the first match on
/// a line is used.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    pattern: Regex,
}

impl LineExtractor {
    pub fn new(pattern: &str) -> Result<Self, AnalyzeError> {
        let compiled = Regex::new(pattern).map_err(|source| AnalyzeError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        if compiled.captures_len() < 2 {
            return Err(AnalyzeError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self { pattern: compiled })
    }

    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|filter| filter.as_str())
            .filter(|filter| !filter.is_empty())
    }
}
