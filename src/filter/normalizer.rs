use super::scanner::{ComponentScanner, ScannedFilter};
use crate::error::AnalyzeError;
use crate::normalize::ValueNormalizer;

/// A filter with every literal value abstracted away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFilter {
    /// The whole filter, structure outside the terms kept verbatim.
    pub full: String,
    /// Each `(attribute=normalized_value)` term, in filter order, duplicates included.
    pub components: Vec<String>,
}

/// Rebuilds filters in their normalized shape.
#[derive(Debug, Clone)]
pub struct FilterNormalizer {
    scanner: ComponentScanner,
    values: ValueNormalizer,
}

impl FilterNormalizer {
    pub fn new(values: ValueNormalizer) -> Result<Self, AnalyzeError> {
        Ok(Self {
            scanner: ComponentScanner::new()?,
            values,
        })
    }

    pub fn normalize(&self, filter: &str) -> NormalizedFilter {
        self.rebuild(&self.scanner.scan(filter))
    }

    /// Reassembles a scanned filter, normalizing each term's value.
    pub fn rebuild(&self, scanned: &ScannedFilter<'_>) -> NormalizedFilter {
        let mut full = String::new();
        let mut components = Vec::with_capacity(scanned.components.len());

        for raw in &scanned.components {
            let component = format!("({}={})", raw.attribute, self.values.normalize(raw.value));
            full.push_str(raw.leading);
            full.push_str(&component);
            components.push(component);
        }
        full.push_str(scanned.trailing);

        NormalizedFilter { full, components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> FilterNormalizer {
        FilterNormalizer::new(ValueNormalizer::default()).expect("normalizer builds")
    }

    #[test]
    fn normalizes_simple_filter() {
        let normalized = normalizer().normalize("(cn=John)");
        assert_eq!(normalized.full, "(cn=<value>)");
        assert_eq!(normalized.components, vec!["(cn=<value>)"]);
    }

    #[test]
    fn normalizes_and_filter() {
        let normalized = normalizer().normalize("(&(cn=John)(sn=Doe))");
        assert_eq!(normalized.full, "(&(cn=<value>)(sn=<value>))");
        assert_eq!(normalized.components, vec!["(cn=<value>)", "(sn=<value>)"]);
    }

    #[test]
    fn keeps_substring_shape() {
        let normalized = normalizer().normalize("(|(mail=*@example.com)(cn=Jo*n))");
        assert_eq!(normalized.full, "(|(mail=*<value>)(cn=<value>*<value>))");
        assert_eq!(
            normalized.components,
            vec!["(mail=*<value>)", "(cn=<value>*<value>)"]
        );
    }

    #[test]
    fn presence_filter_keeps_wildcard_only() {
        let normalized = normalizer().normalize("(objectClass=*)");
        assert_eq!(normalized.full, "(objectClass=*)");
        assert_eq!(normalized.components, vec!["(objectClass=*)"]);
    }

    #[test]
    fn repeated_terms_are_all_reported() {
        let normalized = normalizer().normalize("(|(uid=a)(uid=b))");
        assert_eq!(normalized.components, vec!["(uid=<value>)", "(uid=<value>)"]);
    }

    #[test]
    fn unmatched_filter_is_passed_through() {
        let normalized = normalizer().normalize("not a filter");
        assert_eq!(normalized.full, "not a filter");
        assert!(normalized.components.is_empty());
    }

    #[test]
    fn already_normalized_filter_is_stable() {
        let once = normalizer().normalize("(&(cn=Jo*n)(objectClass=person))");
        let twice = normalizer().normalize(&once.full);
        assert_eq!(once, twice);
    }
}
