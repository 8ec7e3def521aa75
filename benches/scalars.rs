use criterion::*;
use xmlrpc_de::scalar::*;
use xmlrpc_de::Value;

fn coercers(c: &mut Criterion) {
    c.bench_function("int from str", |b| {
        b.iter(|| to_int::<i32>(black_box("-1234567890")))
    });
    c.bench_function("double from str", |b| {
        b.iter(|| to_double::<f64>(black_box("-1234.56789e-12")))
    });
    c.bench_function("date time from str", |b| {
        b.iter(|| to_date_time(black_box("20130704T13:45:09")))
    });
    c.bench_function("bytes from base64", |b| {
        b.iter(|| to_bytes(black_box("eW91IGNhbid0IHJlYWQgdGhpcyE=")))
    });
    c.bench_function("int (err path) from err str", |b| {
        b.iter(|| to_int::<i32>(black_box("12454  432 afsaf")))
    });
}

fn decoding(c: &mut Criterion) {
    let value = Value::array((0..1000).map(|i| Value::int(i.to_string())));
    c.bench_function("decode array of 1000 ints", |b| {
        b.iter(|| black_box(value.clone()).decode::<Vec<i32>>())
    });
}

criterion_group!(benches, coercers, decoding);
criterion_main!(benches);
