use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jwt_claims::{to_fragment, write_claims, Claim, ClaimValue};

fn typical_payload() -> Vec<Claim<'static>> {
    vec![
        Claim::new("iss", "https://issuer.example.com"),
        Claim::new("sub", "user-12345"),
        Claim::new("aud", ClaimValue::string_array(&["api", "web", "mobile"])),
        Claim::new("iat", 1516239022),
        Claim::new("exp", 1516242622),
        Claim::new("admin", false),
    ]
}

fn benchmark_typical_payload(c: &mut Criterion) {
    let claims = typical_payload();

    c.bench_function("write_typical_payload", |b| {
        b.iter(|| to_fragment(black_box(&claims)))
    });
}

fn benchmark_reused_buffer(c: &mut Criterion) {
    let claims = typical_payload();

    c.bench_function("write_typical_payload_reused_buffer", |b| {
        let mut out = String::with_capacity(256);
        b.iter(|| {
            out.clear();
            write_claims(&mut out, black_box(&claims)).unwrap();
        })
    });
}

fn benchmark_claim_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_claims");

    for size in [10, 50, 100, 500].iter() {
        let claims: Vec<Claim> = (0..*size)
            .map(|i| Claim::new(format!("claim{}", i), i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_fragment(black_box(&claims)))
        });
    }
    group.finish();
}

fn benchmark_escape_heavy_strings(c: &mut Criterion) {
    let noisy = "line\none\ttab \"quoted\" back\\slash ".repeat(16);
    let claims = vec![Claim::new("log", noisy.as_str())];

    c.bench_function("write_escape_heavy_string", |b| {
        b.iter(|| to_fragment(black_box(&claims)))
    });
}

criterion_group!(
    benches,
    benchmark_typical_payload,
    benchmark_reused_buffer,
    benchmark_claim_counts,
    benchmark_escape_heavy_strings
);
criterion_main!(benches);
