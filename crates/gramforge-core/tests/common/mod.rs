#![allow(dead_code)]

use gramforge_core::report::{NgramReport, RankedEntry};
use gramforge_core::scanner::FrequencyTable;
use gramforge_core::table::TableKind;

pub fn entry(sequence: &str, frequency: u64, rank: usize) -> RankedEntry {
    RankedEntry {
        sequence: sequence.to_string(),
        frequency,
        rank,
    }
}

/// Adjacent-pair checks: dense ranks from 1, frequency non-increasing, ties ordered by sequence.
pub fn assert_ranked(entries: &[RankedEntry]) {
    if let Some(first) = entries.first() {
        assert_eq!(first.rank, 1, "ranking must start at 1");
    }
    for pair in entries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(a.rank + 1, b.rank, "rank gap between {:?} and {:?}", a, b);
        assert!(a.frequency >= b.frequency, "{:?} before {:?}", a, b);
        if a.frequency == b.frequency {
            assert!(a.sequence < b.sequence, "tie order {:?} / {:?}", a, b);
        }
    }
}

pub fn assert_totals_consistent(report: &NgramReport) {
    for kind in TableKind::all() {
        let sum: u64 = report.table(kind).iter().map(|e| e.frequency).sum();
        assert_eq!(sum, report.totals.get(kind), "total mismatch for {}", kind);
    }
}

pub fn table_sum(table: &FrequencyTable) -> u64 {
    table.values().sum()
}
