// Criterion benchmarks for the purchase predictor

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use purchase_predictor::core::{estimate, estimate_draft};
use purchase_predictor::models::{CustomerProfile, Education, Gender, ProfileDraft};

fn create_profile(id: usize) -> CustomerProfile {
    CustomerProfile {
        age: 18 + (id % 63) as u32,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        education: match id % 3 {
            0 => Education::HighSchool,
            1 => Education::Bachelor,
            _ => Education::Graduate,
        },
        review_score: 1 + (id % 5) as u8,
    }
}

fn bench_estimate(c: &mut Criterion) {
    let profile = create_profile(7);

    c.bench_function("estimate", |b| {
        b.iter(|| estimate(black_box(&profile)));
    });
}

fn bench_estimate_draft(c: &mut Criterion) {
    let draft = ProfileDraft {
        age: Some(35),
        gender: Some("Female".to_string()),
        education: Some("High School".to_string()),
        review_score: Some(4),
    };

    c.bench_function("estimate_draft", |b| {
        b.iter(|| estimate_draft(black_box(&draft)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for count in [10, 100, 1000].iter() {
        let profiles: Vec<CustomerProfile> = (0..*count).map(create_profile).collect();

        group.bench_with_input(BenchmarkId::new("estimate", count), count, |b, _| {
            b.iter(|| {
                profiles
                    .iter()
                    .filter(|p| estimate(black_box(p)).will_purchase)
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_estimate, bench_estimate_draft, bench_batch);

criterion_main!(benches);
