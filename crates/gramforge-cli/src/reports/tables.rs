use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gramforge_core::export::frequency_percent;
use gramforge_core::table::TableKind;
use gramforge_core::view::TableView;

pub fn frequencies(kind: TableKind, view: &TableView, total: u64) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new(kind.label()).add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Frequency").fg(Color::Green),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for e in &view.entries {
        table.add_row(vec![
            Cell::new(e.rank),
            Cell::new(printable(&e.sequence)),
            Cell::new(e.frequency).fg(Color::Cyan),
            Cell::new(frequency_percent(e.frequency, total)).fg(Color::Green),
        ]);
    }

    println!("\n{} ({} shown of {} matching)", kind, view.entries.len(), view.matched);
    println!("{}", table);
    println!(
        "Displayed total: {} | Table total: {}",
        view.displayed_total, total
    );
}

// Whitespace survives when the whitespace filter is off; make it visible in cells.
fn printable(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| match c {
            ' ' => '␣',
            '\t' => '⇥',
            '\n' | '\r' => '↵',
            other => other,
        })
        .collect()
}
