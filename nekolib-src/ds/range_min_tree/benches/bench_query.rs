use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId,
    Criterion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Seq, SubRange};
use range_min_tree::RangeMinTree;

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_min_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x3B, 0x91, 0x0E, 0xC4, 0x58, 0x27, 0xAF, 0x6D, 0x12, 0xE0, 0x7C, 0x95,
        0x4A, 0xD3, 0x08, 0xBE, 0x61, 0x2F, 0x9A, 0xC7, 0x35, 0x80, 0xF4, 0x1D,
        0xA6, 0x5B, 0xE9, 0x03, 0x7E, 0xC2, 0x49, 0xD8,
    ]);
    let len = 10_usize.pow(6);
    let a = Seq { bound: 0..10_i32.pow(9), len }.generate(&mut rng);
    let tree: RangeMinTree<_> = a.clone().into();

    let queries = Seq { bound: SubRange { len }, len: 10_usize.pow(5) }
        .generate(&mut rng);
    let indices = Seq { bound: 0..len, len: 10_usize.pow(5) }.generate(&mut rng);
    let values =
        Seq { bound: 0..10_i32.pow(9), len: 10_usize.pow(5) }.generate(&mut rng);
    let updates: Vec<_> = indices.into_iter().zip(values).collect();
    eprintln!("len: {len}, queries: {}", queries.len());

    group
        .bench_function(BenchmarkId::new("build", len), |b| {
            b.iter_batched(
                || a.clone(),
                |a| black_box(RangeMinTree::<i32>::build(a)),
                BatchSize::LargeInput,
            )
        })
        .bench_function(BenchmarkId::new("query-rand", len), |b| {
            b.iter(|| {
                for &(l, r) in &queries {
                    black_box(tree.query(l, r).ok());
                }
            })
        })
        .bench_function(BenchmarkId::new("query-point", len), |b| {
            b.iter(|| {
                for &(i, _) in &updates {
                    black_box(tree.query(i, i).ok());
                }
            })
        })
        .bench_function(BenchmarkId::new("update-rand", len), |b| {
            b.iter_batched_ref(
                || tree.clone(),
                |tree| {
                    for &(i, x) in &updates {
                        black_box(tree.update(i, x).ok());
                    }
                },
                BatchSize::LargeInput,
            )
        });

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
