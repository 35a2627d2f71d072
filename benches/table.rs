// benches/table.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::json;

use apify_run_fetch::{csv, fetch, table::Table};

/// Listing-shaped payload: mostly flat fields, a few nested objects, keys drifting between records.
fn sample_payload(n: usize) -> String {
    let items: Vec<_> = (0..n)
        .map(|i| {
            let baths = (i % 3) as f64 + 0.5;
            let mut v = json!({
                "zpid": i.to_string(),
                "price": 300_000 + i * 17,
                "bedrooms": i % 5,
                "bathrooms": baths,
                "address": { "street": format!("{i} Main St, Apt \"B\""), "city": "Austin", "zip": "78701" },
                "listing": { "listingStatus": "FOR_SALE", "marketingStatus": null },
                "scrapedAt": "2024-01-01T00:00:00.000Z",
            });
            if i % 7 == 0 {
                v["openHouseShowingList"] = json!([{ "start": 1, "end": 2 }]);
            }
            v
        })
        .collect();
    serde_json::to_string(&items).unwrap()
}

fn bench_export(c: &mut Criterion) {
    let body = sample_payload(5_000);
    let records = fetch::parse_records(&body).unwrap();

    c.bench_function("parse_records_5k", |b| {
        b.iter(|| black_box(fetch::parse_records(black_box(&body)).unwrap().len()))
    });

    c.bench_function("table_from_records_5k", |b| {
        b.iter(|| black_box(Table::from_records(black_box(&records)).len()))
    });

    let table = Table::from_records(&records);
    c.bench_function("table_to_csv_5k", |b| {
        b.iter(|| black_box(csv::table_to_string(black_box(&table), ',').len()))
    });
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
