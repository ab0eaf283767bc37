use crate::error::{GfResult, GramForgeError};
use crate::report::RankedEntry;
use crate::table::TableKind;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Share of `total` as a percentage with three decimals, e.g. `50.000%`.
pub fn frequency_percent(frequency: u64, total: u64) -> String {
    if total == 0 {
        return "0.000%".to_string();
    }
    format!("{:.3}%", (frequency as f64 / total as f64) * 100.0)
}

/// Writes `Rank,<Label>,Counts,Frequency` followed by one row per entry.
///
/// Fields holding a comma, quote or newline are quoted with inner quotes doubled.
pub fn export_csv<W: Write>(
    writer: W,
    entries: &[RankedEntry],
    kind: TableKind,
    total: u64,
) -> GfResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(["Rank", kind.label(), "Counts", "Frequency"])?;
    for e in entries {
        wtr.write_record([
            e.rank.to_string(),
            e.sequence.clone(),
            e.frequency.to_string(),
            frequency_percent(e.frequency, total),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(entries: &[RankedEntry], kind: TableKind, total: u64) -> GfResult<String> {
    let mut buf = Vec::new();
    export_csv(&mut buf, entries, kind, total)?;
    String::from_utf8(buf).map_err(|e| GramForgeError::Validation(e.to_string()))
}
