use crate::error::AnalyzeError;
use regex::Regex;

/// Matches one flat `(attribute=value)` term.
///
/// The attribute excludes `=` and `(`; the value runs to the first `)`.
pub const COMPONENT_PATTERN: &str = r"\(([^=(]+)=([^)]+)\)";

/// One `(attribute=value)` term found in a raw filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComponent<'a> {
    /// Text between the end of the previous term (or the filter start) and
    /// this term's opening parenthesis.
    pub leading: &'a str,
    pub attribute: &'a str,
    pub value: &'a str,
}

/// Result of walking a raw filter left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedFilter<'a> {
    pub components: Vec<RawComponent<'a>>,
    /// Unmatched text after the last term. The whole filter when nothing matched.
    pub trailing: &'a str,
}

/// Splits raw filters into their `(attribute=value)` terms.
///
/// Matching is flat: operators such as `&`, `|` and `!` and any other text
/// between terms is kept as-is in [`RawComponent::leading`] and
/// [`ScannedFilter::trailing`]. A value containing `)` is cut at that
/// parenthesis.
#[derive(Debug, Clone)]
pub struct ComponentScanner {
    pattern: Regex,
}

impl ComponentScanner {
    pub fn new() -> Result<Self, AnalyzeError> {
        let pattern = Regex::new(COMPONENT_PATTERN).map_err(|source| AnalyzeError::Pattern {
            pattern: COMPONENT_PATTERN.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    pub fn scan<'a>(&self, filter: &'a str) -> ScannedFilter<'a> {
        let mut components = Vec::new();
        let mut cursor = 0;

        for caps in self.pattern.captures_iter(filter) {
            let (Some(whole), Some(attribute), Some(value)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            components.push(RawComponent {
                leading: &filter[cursor..whole.start()],
                attribute: attribute.as_str(),
                value: value.as_str(),
            });
            cursor = whole.end();
        }

        ScannedFilter {
            components,
            trailing: &filter[cursor..],
        }
    }
}
