use criterion::{Criterion, black_box, criterion_group, criterion_main};

use anka_engine::{
    CalendarDate, expression, full_map, motivation, official, reduce_keep_masters, reference,
};

fn reduce_bench(c: &mut Criterion) {
    let p = official();

    let mut group = c.benchmark_group("reduce");
    group.bench_function("reduce_keep_masters", |b| {
        b.iter(|| reduce_keep_masters(black_box(987_654), &p.master_numbers))
    });
    group.finish();
}

fn name_numbers_bench(c: &mut Criterion) {
    let official = official();
    let reference = reference();
    let name = "hairã zupanc steinhauser";

    let mut group = c.benchmark_group("name_numbers");
    group.bench_function("expression", |b| {
        b.iter(|| expression(black_box(name), &official))
    });
    group.bench_function("motivation_global", |b| {
        b.iter(|| motivation(black_box(name), &official))
    });
    group.bench_function("motivation_per_word", |b| {
        b.iter(|| motivation(black_box(name), &reference))
    });
    group.finish();
}

fn full_map_bench(c: &mut Criterion) {
    let p = official();
    let birth = CalendarDate::new(28, 5, 1991).expect("valid date");
    let current = CalendarDate::new(6, 8, 2026).expect("valid date");

    let mut group = c.benchmark_group("map");
    group.bench_function("full_map", |b| {
        b.iter(|| full_map(black_box("jéssica paula de souza"), birth, current, &p))
    });
    group.finish();
}

criterion_group!(benches, reduce_bench, name_numbers_bench, full_map_bench);
criterion_main!(benches);
