use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pqc_adapter::{KemAdapter, Resolver, SignatureAdapter};

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    let resolver = Resolver::new();

    group.bench_function("resolve_kem", |b| {
        b.iter(|| black_box(resolver.resolve_kem().unwrap()));
    });

    group.bench_function("resolve_signature", |b| {
        b.iter(|| black_box(resolver.resolve_signature().unwrap()));
    });

    group.finish();
}

fn benchmark_key_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_exchange");
    let kem = KemAdapter::new();
    let (public_key, secret_key) = kem.generate_keypair_to_vec().unwrap();

    group.bench_function("keypair", |b| {
        b.iter(|| black_box(kem.generate_keypair_to_vec().unwrap()));
    });

    group.bench_function("encapsulate", |b| {
        let mut ciphertext = vec![0u8; kem.ciphertext_len().unwrap()];
        let mut key = [0u8; 16];
        b.iter(|| {
            kem.encapsulate(&public_key, &mut ciphertext, &mut key).unwrap();
            black_box(&key);
        });
    });

    group.bench_function("decapsulate", |b| {
        let (ciphertext, _) = kem.encapsulate_to_vec(&public_key).unwrap();
        let mut key = [0u8; 16];
        b.iter(|| {
            kem.decapsulate(&secret_key, &ciphertext, &mut key).unwrap();
            black_box(&key);
        });
    });

    group.bench_function("complete_exchange", |b| {
        b.iter(|| {
            let (ciphertext, k1) = kem.encapsulate_to_vec(&public_key).unwrap();
            let k2 = kem.decapsulate_to_key(&secret_key, &ciphertext).unwrap();
            black_box(k1 == k2);
        });
    });

    group.finish();
}

fn benchmark_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");
    let adapter = SignatureAdapter::new();
    let (public_key, secret_key) = adapter.generate_keypair_to_vec().unwrap();

    for size in [64, 256, 1024, 4096].iter() {
        let data = vec![0x42u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("sign", size), &data, |b, data| {
            let mut signature = vec![0u8; adapter.max_signature_len().unwrap()];
            b.iter(|| black_box(adapter.sign(data, &secret_key, &mut signature).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("verify", size), &data, |b, data| {
            let signature = adapter.sign_to_vec(data, &secret_key).unwrap();
            b.iter(|| black_box(adapter.verify(&public_key, data, &signature).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_resolution, benchmark_key_exchange, benchmark_signature
);
criterion_main!(benches);
