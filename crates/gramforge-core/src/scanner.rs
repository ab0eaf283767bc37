use crate::consts::{MAX_TABLE_PRESIZE, MONOGRAM_CAPACITY};
use crate::table::TableKind;
use fnv::FnvHashMap;
use tracing::debug;

/// Sequence -> occurrence count.
pub type FrequencyTable = FnvHashMap<String, u64>;

/// The five unfiltered tables produced by one pass over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTables {
    pub monograms: FrequencyTable,
    pub bigrams: FrequencyTable,
    pub trigrams: FrequencyTable,
    pub skipgrams: FrequencyTable,
    pub words: FrequencyTable,
}

impl RawTables {
    fn with_capacity(char_count: usize) -> Self {
        let presize = char_count.min(MAX_TABLE_PRESIZE);
        let table = |cap: usize| FrequencyTable::with_capacity_and_hasher(cap, Default::default());

        Self {
            monograms: table(char_count.min(MONOGRAM_CAPACITY)),
            bigrams: table(presize),
            trigrams: table(presize),
            skipgrams: table(presize),
            // Words are at most half the characters (one char plus one separator).
            words: table(presize / 2),
        }
    }

    pub fn table(&self, kind: TableKind) -> &FrequencyTable {
        match kind {
            TableKind::Monograms => &self.monograms,
            TableKind::Bigrams => &self.bigrams,
            TableKind::Trigrams => &self.trigrams,
            TableKind::Skipgrams => &self.skipgrams,
            TableKind::Words => &self.words,
        }
    }
}

/// Counts monograms, bigrams, trigrams, skipgrams and words in a single forward pass.
///
/// Characters are Unicode scalar values for every table, so a multi-byte letter is
/// one unit in a bigram exactly as it is in a monogram. Words are maximal runs of
/// non-whitespace characters, using the same `char::is_whitespace` predicate the
/// aggregator filters on.
pub fn scan(text: &str) -> RawTables {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let mut tables = RawTables::with_capacity(len);
    let mut key = String::with_capacity(12);
    let mut word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        key.clear();
        key.push(c);
        bump(&mut tables.monograms, &key);

        if i + 1 < len {
            key.clear();
            key.extend(&chars[i..i + 2]);
            bump(&mut tables.bigrams, &key);
        }

        if i + 2 < len {
            key.clear();
            key.extend(&chars[i..i + 3]);
            bump(&mut tables.trigrams, &key);

            key.clear();
            key.push(c);
            key.push(chars[i + 2]);
            bump(&mut tables.skipgrams, &key);
        }

        if c.is_whitespace() {
            flush_word(&mut tables.words, &mut word);
        } else {
            word.push(c);
        }
    }
    flush_word(&mut tables.words, &mut word);

    debug!(
        "Scanned {} chars: {} monograms, {} bigrams, {} trigrams, {} skipgrams, {} words (distinct)",
        len,
        tables.monograms.len(),
        tables.bigrams.len(),
        tables.trigrams.len(),
        tables.skipgrams.len(),
        tables.words.len()
    );

    tables
}

// Looks up by &str first so repeated keys do not allocate.
fn bump(table: &mut FrequencyTable, key: &str) {
    if let Some(count) = table.get_mut(key) {
        *count += 1;
    } else {
        table.insert(key.to_owned(), 1);
    }
}

fn flush_word(words: &mut FrequencyTable, word: &mut String) {
    if !word.is_empty() {
        bump(words, word);
        word.clear();
    }
}
