// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use namnsdag::config::ExtractRules;
use namnsdag::specs::namedays;

fn load_sample() -> String {
    // A saved copy of the live page can be dropped in .ignore/ for realistic numbers.
    std::fs::read_to_string(".ignore/page_samples/namnsdagar.html")
        .unwrap_or_else(|_| include_str!("../tests/fixtures/namnsdagar.html").repeat(20))
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();
    let rules = ExtractRules::builtin();

    c.bench_function("namedays_extract", |b| {
        b.iter(|| {
            let table = namedays::extract_with(black_box(&doc), rules);
            black_box(table.len())
        })
    });

    c.bench_function("namedays_parse_date", |b| {
        b.iter(|| namedays::parse_date(black_box("24 december"), rules))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
