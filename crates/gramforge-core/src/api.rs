use crate::aggregator::aggregate;
use crate::config::FilterSettings;
use crate::corpus::Corpus;
use crate::report::NgramReport;
use crate::scanner::{scan, RawTables};
use crate::table::TableKind;
use strum::IntoEnumIterator;
use tracing::debug;

/// Scans `text` once and aggregates all five tables under one set of filters.
pub fn calculate_filtered_ngrams(text: &str, settings: &FilterSettings) -> NgramReport {
    build_report(&scan(text), settings)
}

/// Short name for [`calculate_filtered_ngrams`].
pub fn compute(text: &str, settings: &FilterSettings) -> NgramReport {
    calculate_filtered_ngrams(text, settings)
}

/// Aggregates already-scanned tables.
pub fn build_report(raw: &RawTables, settings: &FilterSettings) -> NgramReport {
    let mut report = NgramReport::default();
    for kind in TableKind::iter() {
        let (entries, total) = aggregate(raw.table(kind), settings);
        report.insert(kind, entries, total);
    }
    report
}

/// A corpus scanned once and re-aggregated on demand.
///
/// Changing filters only re-runs the aggregator; the scan is kept.
pub struct AnalysisSession {
    corpus: Corpus,
    raw: RawTables,
}

impl AnalysisSession {
    pub fn new(corpus: Corpus) -> Self {
        debug!("Session: scanning corpus '{}'", corpus.name);
        let raw = scan(&corpus.text);
        Self { corpus, raw }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn raw(&self) -> &RawTables {
        &self.raw
    }

    pub fn report(&self, settings: &FilterSettings) -> NgramReport {
        build_report(&self.raw, settings)
    }
}
