use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use signer::{JubjubBackend, SigningKey, verify_record};

fn bench_sign(c: &mut Criterion) {
    let ctx = JubjubBackend;
    let mut rng = StdRng::seed_from_u64(42);
    let key = SigningKey::random(&ctx, &mut rng);
    let limbs = [328_451u64, 10, 20];

    c.bench_function("command_sign", |bencher| {
        bencher.iter(|| {
            let record = key.sign(&ctx, &mut rng, black_box(&limbs));
            black_box(record);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let ctx = JubjubBackend;
    let mut rng = StdRng::seed_from_u64(42);
    let key = SigningKey::random(&ctx, &mut rng);
    let limbs = [328_451u64, 10, 20];
    let record = key.sign(&ctx, &mut rng, &limbs);

    c.bench_function("command_verify", |bencher| {
        bencher.iter(|| {
            let ok = verify_record(&ctx, black_box(&record)).expect("verify");
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
