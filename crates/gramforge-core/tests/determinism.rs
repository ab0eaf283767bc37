use gramforge_core::compute;
use gramforge_core::config::FilterSettings;
use gramforge_core::export::to_csv_string;
use gramforge_core::table::TableKind;

fn sample_text() -> String {
    let base = "the quick brown fox jumps over the lazy dog. The Dog sleeps; the FOX runs! ";
    base.repeat(50)
}

#[test]
fn test_report_determinism() {
    println!("\n=== TEST: Report Determinism (Run A vs Run B) ===");
    let text = sample_text();
    let settings = FilterSettings::default();

    let a = compute(&text, &settings);
    let b = compute(&text, &settings);

    println!(
        "Run A: {} bigrams / total {} | Run B: {} bigrams / total {}",
        a.bigrams.len(),
        a.totals.bigrams,
        b.bigrams.len(),
        b.totals.bigrams
    );
    assert_eq!(a, b, "Reports drifted!");
}

#[test]
fn test_export_bytes_are_identical_across_runs() {
    let text = sample_text();
    let settings = FilterSettings {
        filter_whitespace: false,
        ..Default::default()
    };

    for kind in TableKind::all() {
        let a = compute(&text, &settings);
        let b = compute(&text, &settings);
        let csv_a = to_csv_string(a.table(kind), kind, a.totals.get(kind)).unwrap();
        let csv_b = to_csv_string(b.table(kind), kind, b.totals.get(kind)).unwrap();
        assert_eq!(csv_a, csv_b, "CSV drifted for {}", kind);
    }
}
