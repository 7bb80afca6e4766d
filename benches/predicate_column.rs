use std::iter::repeat_with;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use predicate_column::{
    codec::encode_packed_decimal, DecimalColumn, Dictionary, NumericColumn, PackedDecimal,
    PredicateColumn, StrView, StringColumn,
};

const RNG_SEED: u64 = 3;
const BATCH_ROWS: usize = 4096;

fn make_rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(RNG_SEED)
}

fn selection(rng: &mut fastrand::Rng, keep: u8) -> Vec<u16> {
    (0..BATCH_ROWS)
        .filter(|_| rng.u8(0..100) < keep)
        .map(|row| row as u16)
        .collect()
}

fn append_fixed(c: &mut Criterion) {
    let mut rng = make_rng();
    let int_bytes: Vec<u8> = repeat_with(|| rng.i32(..))
        .take(BATCH_ROWS)
        .flat_map(i32::to_le_bytes)
        .collect();
    let decimal_bytes: Vec<u8> = repeat_with(|| encode_packed_decimal(rng.i64(..), rng.i32(..)))
        .take(BATCH_ROWS)
        .flatten()
        .collect();

    let mut group = c.benchmark_group("append_fixed");

    group.bench_function("int32", |b| {
        let mut column = PredicateColumn::<i32>::with_capacity(BATCH_ROWS);
        b.iter(|| {
            column.clear();
            column.append_fixed(black_box(&int_bytes), BATCH_ROWS);
        })
    });

    group.bench_function("decimal", |b| {
        let mut column = PredicateColumn::<PackedDecimal>::with_capacity(BATCH_ROWS);
        b.iter(|| {
            column.clear();
            column.append_fixed(black_box(&decimal_bytes), BATCH_ROWS);
        })
    });

    group.finish();
}

fn materialize(c: &mut Criterion) {
    let mut rng = make_rng();

    let int_bytes: Vec<u8> = repeat_with(|| rng.i64(..))
        .take(BATCH_ROWS)
        .flat_map(i64::to_le_bytes)
        .collect();
    let mut ints = PredicateColumn::<i64>::new();
    ints.append_fixed(&int_bytes, BATCH_ROWS);

    let decimal_bytes: Vec<u8> =
        repeat_with(|| encode_packed_decimal(rng.i64(-1_000_000..1_000_000), rng.i32(0..1000)))
            .take(BATCH_ROWS)
            .flatten()
            .collect();
    let mut decimals = PredicateColumn::<PackedDecimal>::new();
    decimals.append_fixed(&decimal_bytes, BATCH_ROWS);

    let arena: Vec<u8> = repeat_with(|| rng.alphanumeric() as u8).take(64 * 16).collect();
    let offsets: Vec<u32> = (0..64).map(|i| i * 16).collect();
    let lengths = vec![16u32; 64];
    let dict = Dictionary::new(&arena, &offsets, &lengths);
    let codes: Vec<i32> = repeat_with(|| rng.i32(0..64)).take(BATCH_ROWS).collect();
    let mut strings = PredicateColumn::<StrView>::new();
    strings.append_dict(&codes, 0, &dict, BATCH_ROWS);

    let mut group = c.benchmark_group("materialize");

    for keep in [1u8, 10, 50, 100] {
        let rows = selection(&mut rng, keep);

        group.bench_with_input(BenchmarkId::new("int64", keep), &rows, |b, rows| {
            b.iter(|| {
                let mut target = NumericColumn::<i64>::with_capacity(rows.len());
                ints.materialize(black_box(rows), &mut target).unwrap();
                target
            })
        });

        group.bench_with_input(BenchmarkId::new("decimal", keep), &rows, |b, rows| {
            b.iter(|| {
                let mut target = DecimalColumn::with_capacity(rows.len());
                decimals.materialize(black_box(rows), &mut target).unwrap();
                target
            })
        });

        group.bench_with_input(BenchmarkId::new("string", keep), &rows, |b, rows| {
            b.iter(|| {
                let mut target = StringColumn::with_capacity(rows.len(), rows.len() * 16);
                strings.materialize(black_box(rows), &mut target).unwrap();
                target
            })
        });
    }

    group.finish();
}

criterion_group!(benches, append_fixed, materialize);
criterion_main!(benches);
