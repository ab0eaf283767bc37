use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The five frequency tables produced for every corpus.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    #[default]
    Monograms,
    Bigrams,
    Trigrams,
    Skipgrams,
    Words,
}

impl TableKind {
    /// All kinds in report order.
    pub fn all() -> impl Iterator<Item = TableKind> {
        Self::iter()
    }

    /// Singular column label used in export headers.
    pub fn label(self) -> &'static str {
        match self {
            TableKind::Monograms => "Monogram",
            TableKind::Bigrams => "Bigram",
            TableKind::Trigrams => "Trigram",
            TableKind::Skipgrams => "Skipgram",
            TableKind::Words => "Word",
        }
    }
}
