use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sort_classroom_rs::engines;
use sort_step_tools::{patterns, Engine, NullSink};

fn bench_engine<E: Engine>(c: &mut Criterion, len: usize) {
    let input = patterns::random_uniform(len);
    c.bench_function(&format!("{}/{len}", E::name()), |b| {
        b.iter(|| {
            let mut data = input.clone();
            E::run(black_box(&mut data), &mut NullSink)
        })
    });
}

fn trace_engines(c: &mut Criterion) {
    for len in [10, 20] {
        bench_engine::<engines::bubble::SortImpl>(c, len);
        bench_engine::<engines::selection::SortImpl>(c, len);
        bench_engine::<engines::insertion_standard::SortImpl>(c, len);
        bench_engine::<engines::insertion_textbook::SortImpl>(c, len);
    }
}

criterion_group!(benches, trace_engines);
criterion_main!(benches);
