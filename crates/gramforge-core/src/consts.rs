/// Initial capacity of the monogram table. Most corpora use fewer distinct characters.
pub const MONOGRAM_CAPACITY: usize = 256;

/// Upper bound on pre-sizing for the multi-character tables, so a huge corpus
/// does not reserve memory for keys it will never produce.
pub const MAX_TABLE_PRESIZE: usize = 1 << 16;

/// Number of hex digits of the corpus fingerprint shown in logs and reports.
pub const FINGERPRINT_DISPLAY_LEN: usize = 12;
