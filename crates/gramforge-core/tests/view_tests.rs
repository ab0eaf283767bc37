mod common;

use common::{assert_ranked, entry};
use gramforge_core::compute;
use gramforge_core::config::{FilterSettings, ViewParams};
use gramforge_core::table::TableKind;
use gramforge_core::view::{filter_report, SearchPattern, TableView};

fn sample() -> Vec<gramforge_core::report::RankedEntry> {
    vec![
        entry("th", 9, 1),
        entry("he", 7, 2),
        entry("in", 5, 3),
        entry("at", 5, 4),
        entry("ht", 1, 5),
    ]
}

#[test]
fn test_empty_query_no_limit_is_identity() {
    let view = TableView::build(&sample(), "", 0, false).unwrap();
    assert_eq!(view.entries, sample());
    assert_eq!(view.matched, 5);
    assert_eq!(view.displayed_total, 27);
}

#[test]
fn test_search_reranks_densely() {
    let view = TableView::build(&sample(), "h", 0, false).unwrap();
    assert_eq!(
        view.entries,
        vec![entry("th", 9, 1), entry("he", 7, 2), entry("ht", 1, 3)]
    );
    assert_eq!(view.displayed_total, 17);
    assert_ranked(&view.entries);
}

#[test]
fn test_limit_truncates_after_matching() {
    let view = TableView::build(&sample(), "t", 2, false).unwrap();
    assert_eq!(view.entries, vec![entry("th", 9, 1), entry("at", 5, 2)]);
    assert_eq!(view.matched, 3);
    assert_eq!(view.displayed_total, 14);
}

#[test]
fn test_limit_larger_than_table() {
    let view = TableView::build(&sample(), "", 50, false).unwrap();
    assert_eq!(view.entries.len(), 5);
}

#[test]
fn test_regex_query() {
    let view = TableView::build(&sample(), "^[ai]", 0, false).unwrap();
    assert_eq!(view.entries, vec![entry("in", 5, 1), entry("at", 5, 2)]);
}

#[test]
fn test_query_case_follows_filter_setting() {
    let insensitive = SearchPattern::compile("TH", false).unwrap();
    assert!(insensitive.is_match("th"));

    let sensitive = SearchPattern::compile("TH", true).unwrap();
    assert!(!sensitive.is_match("th"));
    assert!(sensitive.is_match("THE"));
}

#[test]
fn test_filter_report_keeps_core_totals() {
    let filters = FilterSettings::default();
    let report = compute("the cat and the hat", &filters);
    let view = ViewParams {
        table: TableKind::Words,
        query: "at".to_string(),
        limit: 1,
    };

    let filtered = filter_report(&report, &view, &filters).unwrap();
    assert_eq!(filtered.totals, report.totals);
    assert_eq!(filtered.words, vec![entry("cat", 1, 1)]);
    assert!(filtered.monograms.is_empty());
}
