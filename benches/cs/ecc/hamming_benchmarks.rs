use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_sim::cs::ecc::hamming::{
    decode, encode, random_message, simulate, syndrome, HammingCode, SimulationConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [usize; 4] = [4, 11, 26, 57];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_build");
    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| HammingCode::new(black_box(n as i64)).unwrap())
        });
    }
    group.finish();
}

fn bench_free_functions(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("hamming_roundtrip");
    for &n in &SIZES {
        let message = random_message(n, &mut rng);
        let codeword = encode(&message).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", n), &message, |b, m| {
            b.iter(|| encode(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("syndrome", n), &codeword, |b, c| {
            b.iter(|| syndrome(black_box(c)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", n), &codeword, |b, c| {
            b.iter(|| decode(black_box(c)).unwrap())
        });
    }
    group.finish();
}

fn bench_prebuilt_code(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("hamming_prebuilt");
    for &n in &SIZES {
        let code = HammingCode::new(n as i64).unwrap();
        let message = random_message(n, &mut rng);
        let mut received = code.encode(&message).unwrap();
        received[n / 2] ^= 1;
        group.bench_with_input(BenchmarkId::new("correct", n), &received, |b, r| {
            b.iter(|| code.correct(black_box(r)).unwrap())
        });
    }
    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2021);
    let config = SimulationConfig::new(26);
    c.bench_function("hamming_simulate_26", |b| {
        b.iter(|| simulate(black_box(&config), &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_free_functions,
    bench_prebuilt_code,
    bench_simulate
);
criterion_main!(benches);
