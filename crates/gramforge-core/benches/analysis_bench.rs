use criterion::{criterion_group, criterion_main, Criterion};
use gramforge_core::aggregator::aggregate;
use gramforge_core::compute;
use gramforge_core::config::FilterSettings;
use gramforge_core::scanner::scan;
use std::hint::black_box;

fn synthetic_corpus() -> String {
    // Deterministic pseudo-text: words of 1-8 letters drawn from a small LCG.
    let letters: Vec<char> = "etaoinshrdlucmfwypvbgkjqxzÉé,.".chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    let mut text = String::with_capacity(200_000);
    while text.len() < 200_000 {
        let len = 1 + next() % 8;
        for _ in 0..len {
            text.push(letters[next() % letters.len()]);
        }
        text.push(if next() % 10 == 0 { '\n' } else { ' ' });
    }
    text
}

fn bench_analysis(c: &mut Criterion) {
    let text = synthetic_corpus();
    let settings = FilterSettings::default();

    c.bench_function("scan_200k", |b| b.iter(|| scan(black_box(&text))));

    let raw = scan(&text);
    c.bench_function("aggregate_trigrams", |b| {
        b.iter(|| aggregate(black_box(&raw.trigrams), black_box(&settings)))
    });

    c.bench_function("compute_200k", |b| {
        b.iter(|| compute(black_box(&text), black_box(&settings)))
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
