use crate::config::FilterSettings;
use crate::report::RankedEntry;
use crate::scanner::FrequencyTable;
use itertools::Itertools;
use std::borrow::Cow;
use tracing::debug;

/// A raw table after exclusion and case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredTable {
    pub counts: FrequencyTable,
    /// Sum of every surviving raw count, taken before keys were collapsed.
    pub total: u64,
}

/// Anything that is neither alphanumeric nor whitespace.
pub fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Whether a raw sequence is discarded under `settings`.
pub fn is_excluded(sequence: &str, settings: &FilterSettings) -> bool {
    if settings.filter_whitespace && sequence.chars().any(char::is_whitespace) {
        return true;
    }
    settings.filter_punctuation && sequence.chars().any(is_punctuation)
}

pub fn normalize<'a>(sequence: &'a str, settings: &FilterSettings) -> Cow<'a, str> {
    if settings.case_sensitive {
        Cow::Borrowed(sequence)
    } else {
        Cow::Owned(sequence.to_lowercase())
    }
}

/// Drops excluded sequences, folds case and sums counts of keys that collapse together.
pub fn filter_table(raw: &FrequencyTable, settings: &FilterSettings) -> FilteredTable {
    let seed = FilteredTable {
        counts: FrequencyTable::with_capacity_and_hasher(raw.len(), Default::default()),
        total: 0,
    };

    raw.iter()
        .filter(|(sequence, _)| !is_excluded(sequence, settings))
        .fold(seed, |mut acc, (sequence, &count)| {
            acc.total += count;
            *acc.counts
                .entry(normalize(sequence, settings).into_owned())
                .or_default() += count;
            acc
        })
}

/// Orders by count descending, then sequence ascending, and numbers the result from 1.
///
/// The comparator alone fixes the order, so the hash map's iteration order never leaks
/// into the output.
pub fn rank(table: FilteredTable) -> Vec<RankedEntry> {
    table
        .counts
        .into_iter()
        .sorted_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .enumerate()
        .map(|(i, (sequence, frequency))| RankedEntry {
            sequence,
            frequency,
            rank: i + 1,
        })
        .collect()
}

/// `filter_table` followed by `rank`. Returns the ranked entries and the table total.
pub fn aggregate(raw: &FrequencyTable, settings: &FilterSettings) -> (Vec<RankedEntry>, u64) {
    let filtered = filter_table(raw, settings);
    let total = filtered.total;
    let entries = rank(filtered);

    debug!(
        "Aggregated {} raw keys into {} ranked entries (total {})",
        raw.len(),
        entries.len(),
        total
    );

    (entries, total)
}
