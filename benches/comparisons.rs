use cbor_value::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn cbor_i64_encode(c: &mut Criterion) {
    c.bench_function("CBOR i64 encode", |b| {
        let v = 1_000_000i64.into_value();
        b.iter(|| encode(black_box(&v)))
    });
}

fn cbor_i64_ser(c: &mut Criterion) {
    c.bench_function("CBOR i64 ser", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(128);
            out.put_i64(black_box(1_000_000));
            out
        })
    });
}

fn json_i64_encode(c: &mut Criterion) {
    c.bench_function("JSON i64 encode", |b| {
        b.iter(|| serde_json::to_string(&black_box(1_000_000i64)))
    });
}

fn cbor_i64_decode(c: &mut Criterion) {
    c.bench_function("CBOR i64 decode", |b| {
        let enc = encode(&1_000_000i64.into_value());
        b.iter(|| decode(black_box(&enc)))
    });
}

fn json_i64_decode(c: &mut Criterion) {
    c.bench_function("JSON i64 decode", |b| {
        let enc = serde_json::to_string(&1_000_000i64).unwrap();
        b.iter(|| serde_json::from_str::<i64>(black_box(&enc)))
    });
}

fn cbor_str_encode(c: &mut Criterion) {
    c.bench_function("CBOR byte string encode", |b| {
        let s: Vec<u8> = (0..10_000).map(|x| x as u8).collect();
        let v = Bytes::from(s).into_value();
        b.iter(|| encode(black_box(&v)))
    });
}

fn json_str_encode(c: &mut Criterion) {
    c.bench_function("JSON byte string encode", |b| {
        let s: Vec<u8> = (0..10_000).map(|x| x as u8).collect();
        b.iter(|| serde_json::to_string(&black_box(&s)))
    });
}

criterion_group!(
    benches,
    cbor_i64_encode,
    cbor_i64_ser,
    json_i64_encode,
    cbor_i64_decode,
    json_i64_decode,
    cbor_str_encode,
    json_str_encode,
);

criterion_main!(benches);
