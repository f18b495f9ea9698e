use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use query_value::{decode, encode, ArrayFormat, BooleanFormat, NullFormat, Options, Value};

fn benchmark_encode_scalar(c: &mut Criterion) {
    let options = Options::new();
    let value = Value::from("alice@example.com & friends");

    c.bench_function("encode_scalar", |b| {
        b.iter(|| encode(black_box("email"), black_box(&value), &options))
    });
}

fn benchmark_encode_bool(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_bool");

    for format in [
        BooleanFormat::None,
        BooleanFormat::Unicode,
        BooleanFormat::EmptyTrue,
    ] {
        let options = Options::new().with_boolean_format(format);
        group.bench_with_input(BenchmarkId::from_parameter(format), &options, |b, options| {
            b.iter(|| encode(black_box("active"), black_box(&Value::Bool(true)), options))
        });
    }

    group.finish();
}

fn benchmark_encode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_array");
    let options = Options::new().with_array_format(ArrayFormat::Index);

    for size in [10, 100, 1000].iter() {
        let value = Value::from((0..*size).collect::<Vec<i64>>());
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box("ids"), black_box(value), &options))
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let options = Options::new()
        .with_boolean_format(BooleanFormat::Unicode)
        .with_null_format(NullFormat::String);

    c.bench_function("decode_escaped", |b| {
        b.iter(|| decode(black_box(Some("alice%40example.com%20%26+friends")), &options))
    });

    c.bench_function("decode_unicode_bool", |b| {
        b.iter(|| decode(black_box(Some("%E2%9C%93")), &options))
    });
}

criterion_group!(
    benches,
    benchmark_encode_scalar,
    benchmark_encode_bool,
    benchmark_encode_array,
    benchmark_decode
);
criterion_main!(benches);
