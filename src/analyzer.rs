use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::extract::LineExtractor;
use crate::filter::FilterNormalizer;
use crate::frequency::{FrequencyTable, Insertion};
use crate::normalize::ValueNormalizer;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters describing how much input was consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputStats {
    pub files: usize,
    pub lines: usize,
    pub filters: usize,
}

/// Aggregated filter shapes, sorted by descending count.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub stats: InputStats,
    #[serde(serialize_with = "serialize_entries")]
    pub full_filters: FrequencyTable,
    #[serde(serialize_with = "serialize_entries")]
    pub components: FrequencyTable,
}

fn serialize_entries<S>(table: &FrequencyTable, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    table.entries().serialize(serializer)
}

/// Runs lines through extraction and normalization and counts the results.
///
/// Input order matters: it decides first-seen order in both tables and so the
/// order of equal counts in the final report.
#[derive(Debug)]
pub struct Analyzer {
    extractor: LineExtractor,
    normalizer: FilterNormalizer,
    full_filters: FrequencyTable,
    components: FrequencyTable,
    stats: InputStats,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzeError> {
        config.validate()?;

        let extractor = LineExtractor::new(&config.filter_pattern)?;
        let normalizer =
            FilterNormalizer::new(ValueNormalizer::new(&config.placeholder, config.wildcard))?;
        let new_table = || match config.max_entries {
            Some(limit) => FrequencyTable::with_limit(limit),
            None => FrequencyTable::new(),
        };

        Ok(Self {
            extractor,
            normalizer,
            full_filters: new_table(),
            components: new_table(),
            stats: InputStats::default(),
        })
    }

    /// Processes one log line. Returns `true` when it carried a filter.
    pub fn process_line(&mut self, line: &str) -> bool {
        self.stats.lines += 1;

        let Some(raw_filter) = self.extractor.extract(line) else {
            tracing::trace!(line = self.stats.lines, "no filter on line");
            return false;
        };
        self.stats.filters += 1;

        let normalized = self.normalizer.normalize(raw_filter);
        for component in &normalized.components {
            record(&mut self.components, component, "component");
        }
        record(&mut self.full_filters, &normalized.full, "full filter");

        true
    }

    /// Processes every line of a reader. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected.
    pub fn process_reader<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<usize> {
        let mut buf = Vec::new();
        let mut matched = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.process_line(line) {
                matched += 1;
            }
        }

        Ok(matched)
    }

    pub fn process_file(&mut self, path: &Path) -> Result<(), AnalyzeError> {
        let io_error = |source| AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        tracing::info!(file = %path.display(), "reading access log");

        let lines_before = self.stats.lines;
        let matched = self
            .process_reader(BufReader::new(file))
            .map_err(io_error)?;
        self.stats.files += 1;

        tracing::info!(
            file = %path.display(),
            lines = self.stats.lines - lines_before,
            filters = matched,
            "finished access log"
        );
        Ok(())
    }

    pub fn stats(&self) -> InputStats {
        self.stats
    }

    pub fn full_filters(&self) -> &FrequencyTable {
        &self.full_filters
    }

    pub fn components(&self) -> &FrequencyTable {
        &self.components
    }

    /// Sorts both tables and hands them over as a report.
    pub fn finish(self) -> FilterReport {
        let Self {
            mut full_filters,
            mut components,
            stats,
            ..
        } = self;

        for (name, table) in [("full filter", &full_filters), ("component", &components)] {
            if table.dropped() > 0 {
                tracing::warn!(
                    table = name,
                    dropped = table.dropped(),
                    "occurrences dropped at table capacity"
                );
            }
        }

        full_filters.sort();
        components.sort();

        FilterReport {
            stats,
            full_filters,
            components,
        }
    }
}

fn record(table: &mut FrequencyTable, value: &str, name: &str) {
    if table.insert(value) == Insertion::Dropped && table.dropped() == 1 {
        tracing::warn!(
            table = name,
            limit = table.capacity(),
            value,
            "table is full, new entries are dropped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn analyzer() -> Analyzer {
        Analyzer::new(&AnalyzerConfig::default()).expect("default analyzer builds")
    }

    #[test]
    fn counts_full_filters_and_components() {
        let mut analyzer = analyzer();
        assert!(analyzer.process_line(r#"SRCH filter="(&(cn=John)(sn=Doe))""#));
        assert!(analyzer.process_line(r#"SRCH filter="(cn=Jane)""#));

        assert_eq!(analyzer.full_filters().get("(&(cn=<value>)(sn=<value>))"), Some(1));
        assert_eq!(analyzer.full_filters().get("(cn=<value>)"), Some(1));
        assert_eq!(analyzer.components().get("(cn=<value>)"), Some(2));
        assert_eq!(analyzer.components().get("(sn=<value>)"), Some(1));
    }

    #[test]
    fn filter_without_terms_counts_only_full_filter() {
        let mut analyzer = analyzer();
        analyzer.process_line(r#"filter="objectClass""#);

        assert_eq!(analyzer.full_filters().get("objectClass"), Some(1));
        assert!(analyzer.components().is_empty());
    }

    #[test]
    fn reader_handles_crlf_and_invalid_utf8() {
        let mut input = b"filter=\"(cn=a)\"\r\n".to_vec();
        input.extend_from_slice(b"filter=\"(cn=\xff\xfe)\"\n");
        input.extend_from_slice(b"no filter here");

        let mut analyzer = analyzer();
        let matched = analyzer
            .process_reader(Cursor::new(input))
            .expect("in-memory read succeeds");

        assert_eq!(matched, 2);
        assert_eq!(analyzer.stats().lines, 3);
        assert_eq!(analyzer.full_filters().get("(cn=<value>)"), Some(2));
    }

    #[test]
    fn capacity_limit_applies_to_both_tables() {
        let config = AnalyzerConfig {
            max_entries: Some(1),
            ..AnalyzerConfig::default()
        };
        let mut analyzer = Analyzer::new(&config).expect("analyzer builds");
        analyzer.process_line(r#"filter="(cn=a)""#);
        analyzer.process_line(r#"filter="(sn=b)""#);
        analyzer.process_line(r#"filter="(cn=c)""#);

        let report = analyzer.finish();
        assert_eq!(report.full_filters.len(), 1);
        assert_eq!(report.full_filters.get("(cn=<value>)"), Some(2));
        assert_eq!(report.full_filters.dropped(), 1);
        assert_eq!(report.components.dropped(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnalyzerConfig {
            filter_pattern: "filter=\"".to_string(),
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            Analyzer::new(&config),
            Err(AnalyzeError::MissingCaptureGroup { .. })
        ));
    }
}
