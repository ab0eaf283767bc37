use crate::config::{FilterSettings, ViewParams};
use crate::error::GfResult;
use crate::report::{NgramReport, RankedEntry};
use crate::table::TableKind;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

/// Search over ranked sequences. An empty query matches everything.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Option<Regex>,
}

impl SearchPattern {
    /// Compiles `query` as a regex; a query that is not valid regex syntax is matched literally.
    pub fn compile(query: &str, case_sensitive: bool) -> GfResult<Self> {
        if query.is_empty() {
            return Ok(Self { regex: None });
        }

        let regex = match RegexBuilder::new(query)
            .case_insensitive(!case_sensitive)
            .build()
        {
            Ok(regex) => regex,
            Err(e) => {
                debug!("Query '{}' is not a regex ({}), matching literally", query, e);
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(!case_sensitive)
                    .build()?
            }
        };

        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, sequence: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(sequence),
            None => true,
        }
    }
}

/// A searched and truncated slice of one ranked table, re-ranked from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub entries: Vec<RankedEntry>,
    /// Entries that matched the query before the limit was applied.
    pub matched: usize,
    /// Sum of the frequencies actually shown.
    pub displayed_total: u64,
}

impl TableView {
    /// `limit == 0` means no limit.
    pub fn build(
        entries: &[RankedEntry],
        query: &str,
        limit: usize,
        case_sensitive: bool,
    ) -> GfResult<Self> {
        let pattern = SearchPattern::compile(query, case_sensitive)?;
        Ok(Self::with_pattern(entries, &pattern, limit))
    }

    pub fn with_pattern(entries: &[RankedEntry], pattern: &SearchPattern, limit: usize) -> Self {
        let matching: Vec<&RankedEntry> = entries
            .iter()
            .filter(|e| pattern.is_match(&e.sequence))
            .collect();
        let matched = matching.len();
        let take = if limit == 0 { matched } else { limit.min(matched) };

        let shown: Vec<RankedEntry> = matching
            .into_iter()
            .take(take)
            .enumerate()
            .map(|(i, e)| RankedEntry {
                sequence: e.sequence.clone(),
                frequency: e.frequency,
                rank: i + 1,
            })
            .collect();
        let displayed_total = shown.iter().map(|e| e.frequency).sum();

        Self {
            entries: shown,
            matched,
            displayed_total,
        }
    }
}

/// Applies the view's query and limit to every table. Totals stay the core totals.
pub fn filter_report(
    report: &NgramReport,
    view: &ViewParams,
    filters: &FilterSettings,
) -> GfResult<NgramReport> {
    let pattern = SearchPattern::compile(&view.query, filters.case_sensitive)?;
    let mut filtered = NgramReport::default();

    for kind in TableKind::all() {
        let table = TableView::with_pattern(report.table(kind), &pattern, view.limit);
        filtered.insert(kind, table.entries, report.totals.get(kind));
    }

    Ok(filtered)
}
