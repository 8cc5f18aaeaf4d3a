use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sg_match::BrightnessMatcher;

fn full_ascii_charset() -> String {
    (32u8..=126).map(char::from).collect()
}

fn bench_match_char(c: &mut Criterion) {
    let matcher = BrightnessMatcher::builtin(full_ascii_charset().chars());
    c.bench_function("match_char full ascii", |b| {
        b.iter(|| {
            for i in 0..=100 {
                let brightness = f64::from(i) / 100.0;
                let _ = black_box(matcher.match_char(black_box(brightness)));
            }
        });
    });
}

fn bench_incremental_add(c: &mut Criterion) {
    c.bench_function("add into digits", |b| {
        b.iter_with_setup(
            || BrightnessMatcher::builtin("0123456789".chars()),
            |mut matcher| {
                for ch in 'a'..='z' {
                    matcher.add(black_box(ch));
                }
                black_box(matcher)
            },
        );
    });
}

fn bench_build(c: &mut Criterion) {
    let charset = full_ascii_charset();
    c.bench_function("build full ascii", |b| {
        b.iter(|| black_box(BrightnessMatcher::builtin(black_box(charset.chars()))));
    });
}

criterion_group!(benches, bench_match_char, bench_incremental_add, bench_build);
criterion_main!(benches);
