use crate::table::TableKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub sequence: String,
    pub frequency: u64,
    /// Dense 1-based position in the sorted table.
    pub rank: usize,
}

/// Post-filter occurrence totals, one per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub monograms: u64,
    pub bigrams: u64,
    pub trigrams: u64,
    pub skipgrams: u64,
    pub words: u64,
}

impl Totals {
    pub fn get(&self, kind: TableKind) -> u64 {
        match kind {
            TableKind::Monograms => self.monograms,
            TableKind::Bigrams => self.bigrams,
            TableKind::Trigrams => self.trigrams,
            TableKind::Skipgrams => self.skipgrams,
            TableKind::Words => self.words,
        }
    }

    pub fn get_mut(&mut self, kind: TableKind) -> &mut u64 {
        match kind {
            TableKind::Monograms => &mut self.monograms,
            TableKind::Bigrams => &mut self.bigrams,
            TableKind::Trigrams => &mut self.trigrams,
            TableKind::Skipgrams => &mut self.skipgrams,
            TableKind::Words => &mut self.words,
        }
    }
}

/// Five ranked tables plus their totals. This is the whole product of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramReport {
    pub monograms: Vec<RankedEntry>,
    pub bigrams: Vec<RankedEntry>,
    pub trigrams: Vec<RankedEntry>,
    pub skipgrams: Vec<RankedEntry>,
    pub words: Vec<RankedEntry>,
    pub totals: Totals,
}

impl NgramReport {
    pub fn table(&self, kind: TableKind) -> &[RankedEntry] {
        match kind {
            TableKind::Monograms => &self.monograms,
            TableKind::Bigrams => &self.bigrams,
            TableKind::Trigrams => &self.trigrams,
            TableKind::Skipgrams => &self.skipgrams,
            TableKind::Words => &self.words,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut Vec<RankedEntry> {
        match kind {
            TableKind::Monograms => &mut self.monograms,
            TableKind::Bigrams => &mut self.bigrams,
            TableKind::Trigrams => &mut self.trigrams,
            TableKind::Skipgrams => &mut self.skipgrams,
            TableKind::Words => &mut self.words,
        }
    }

    /// Replaces one table and its total.
    pub fn insert(&mut self, kind: TableKind, entries: Vec<RankedEntry>, total: u64) {
        *self.table_mut(kind) = entries;
        *self.totals.get_mut(kind) = total;
    }
}
