use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math::prelude::*;
use shamir_core::{ShamirScheme, StandardPrime};

const CONFIGURATIONS: &[(usize, usize)] = &[(2, 3), (3, 5), (5, 10), (10, 20)];

fn bench_split_and_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mersenne127");
    let secret = uint!(0x0123_4567_89ab_cdef_u64);

    for &(threshold, participants) in CONFIGURATIONS {
        let scheme = ShamirScheme::with_standard_prime(
            StandardPrime::Mersenne127,
            participants,
            threshold,
        )
        .expect("valid scheme configuration");

        group.bench_function(format!("split/{threshold}-of-{participants}"), |b| {
            b.iter(|| scheme.split(black_box(&secret)).expect("split succeeds"));
        });

        let shares = scheme.split(&secret).expect("split succeeds");
        group.bench_function(format!("interpolate/{threshold}-of-{participants}"), |b| {
            b.iter(|| {
                scheme
                    .interpolate(black_box(&shares[..threshold]))
                    .expect("interpolation succeeds")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split_and_interpolate);
criterion_main!(benches);
