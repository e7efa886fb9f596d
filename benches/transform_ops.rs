//! Benchmark: core transform throughput over the ternary representation.
//!
//! Measures the codec, both ring variants, the double-key schedules and the
//! LCG jump-ahead on message sizes where the big-integer arithmetic starts
//! to dominate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ternary_engine::codec::{compress, decompress};
use ternary_engine::{
    CipherContext, IntegerRing, KeySchedule, PolyRing, RingOps, TernaryScheme,
};

const TEXT: &str = "PACK MY BOX WITH FIVE DOZEN LIQUOR JUGS PACK MY BOX WITH FIVE DOZEN";
const KEY: &str = "CRYPTOGRAPHY";

fn bench_codec(c: &mut Criterion) {
    let ctx = CipherContext::builtin();
    let mut group = c.benchmark_group("codec");

    group.bench_function("encode", |bencher| {
        bencher.iter(|| black_box(ctx.standard.encode(black_box(TEXT))))
    });

    let digits = ctx.standard.encode(TEXT);
    group.bench_function("decode", |bencher| {
        bencher.iter(|| black_box(ctx.standard.decode(black_box(&digits)).unwrap()))
    });

    let packed = compress(&ctx, TEXT).unwrap();
    group.bench_function("compress", |bencher| {
        bencher.iter(|| black_box(compress(&ctx, black_box(TEXT)).unwrap()))
    });
    group.bench_function("decompress", |bencher| {
        bencher.iter(|| black_box(decompress(&ctx, black_box(&packed)).unwrap()))
    });

    group.finish();
}

fn bench_ring_ops(c: &mut Criterion) {
    let ctx = CipherContext::builtin();
    let int_ops = RingOps::new(IntegerRing, &ctx.standard);
    let poly_ops = RingOps::new(PolyRing, &ctx.standard);
    let mut group = c.benchmark_group("ring");

    group.bench_function("integer_product", |bencher| {
        bencher.iter(|| black_box(int_ops.product(black_box(TEXT), black_box(KEY)).unwrap()))
    });
    group.bench_function("integer_inverse", |bencher| {
        bencher.iter(|| black_box(int_ops.inverse(black_box(KEY), TEXT.len()).unwrap()))
    });
    group.bench_function("poly_product", |bencher| {
        bencher.iter(|| black_box(poly_ops.product(black_box(TEXT), black_box(KEY)).unwrap()))
    });
    group.bench_function("poly_inverse", |bencher| {
        bencher.iter(|| black_box(poly_ops.inverse(black_box(KEY), TEXT.len()).unwrap()))
    });

    group.finish();
}

fn bench_schedules(c: &mut Criterion) {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    let mut group = c.benchmark_group("double_key");

    for (name, schedule) in [
        ("sequential", KeySchedule::Sequential),
        ("interleaved", KeySchedule::Interleaved),
        ("nilpotent_shift", KeySchedule::NilpotentShift),
    ] {
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                black_box(
                    ops.double_product(black_box(TEXT), black_box(KEY), schedule)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_lcg(c: &mut Criterion) {
    let ctx = CipherContext::builtin();
    let cipher = TernaryScheme::new(&ctx.standard, "E", "C").unwrap();
    let mut group = c.benchmark_group("congruential");

    group.bench_function("encrypt", |bencher| {
        bencher.iter(|| black_box(cipher.encrypt(black_box(TEXT), black_box(KEY)).unwrap()))
    });

    let encrypted = cipher.encrypt(TEXT, KEY).unwrap();
    group.bench_function("decrypt", |bencher| {
        bencher.iter(|| {
            black_box(
                cipher
                    .decrypt(black_box(&encrypted), black_box(KEY))
                    .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_codec,
    bench_ring_ops,
    bench_schedules,
    bench_lcg
);
criterion_main!(benches);
