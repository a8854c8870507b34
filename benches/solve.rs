use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

fn random_case(n: usize, domain: u32, free: usize, rng: &mut StdRng) -> Vec<Option<u32>> {
    let mut values: Vec<Option<u32>> = (0..n).map(|_| Some(rng.gen_range(0..domain))).collect();
    let mut positions: Vec<usize> = (0..n).collect();
    positions.shuffle(rng);
    for &position in &positions[..free] {
        values[position] = None;
    }
    values
}

fn counting(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    let mut group = c.benchmark_group("solve");
    for &(n, free) in &[(101, 8), (1001, 16), (5001, 24)] {
        let domain = 1_000_000;
        let seq = random_case(n, domain, free, &mut rng);
        group.bench_function(format!("solve_{}_{}", n, free), |b| {
            b.iter(|| medcount::solve(black_box(&seq), domain))
        });
    }
    group.finish();
}

criterion_group!(benches, counting);
criterion_main!(benches);
