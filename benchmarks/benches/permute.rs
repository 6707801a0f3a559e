/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use medimg_axes::{permute_axes, AxisMap, Direction};
use medimg_benches::SHAPES;
use nanorand::Rng;

fn random_volume(len: usize) -> Vec<f64> {
    let mut rng = nanorand::WyRand::new_seed(42);
    (0..len).map(|_| rng.generate::<f64>()).collect()
}

/// Per offset mapping, what the permutation would cost without tiling
fn permute_by_offset(src: &[f64], map: &AxisMap) -> Vec<f64> {
    let mut out = vec![0.0; src.len()];

    for (host, value) in out.iter_mut().enumerate() {
        *value = src[map.to_native(host)];
    }
    out
}

fn bench_permute(c: &mut Criterion) {
    for shape in SHAPES {
        let len = shape.iter().product::<usize>();
        let data = random_volume(len);
        let map = AxisMap::new(&shape).unwrap();

        let mut group = c.benchmark_group(format!("permute: {shape:?}"));
        group.throughput(Throughput::Bytes((len * 8) as u64));

        group.bench_function("native to host", |b| {
            b.iter(|| black_box(permute_axes(&data, &shape, Direction::NativeToHost).unwrap()))
        });
        group.bench_function("host to native", |b| {
            b.iter(|| black_box(permute_axes(&data, &shape, Direction::HostToNative).unwrap()))
        });
        group.bench_function("axis map", |b| {
            b.iter(|| black_box(permute_by_offset(&data, &map)))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(std::time::Duration::from_secs(5))
      };
    targets=bench_permute);

criterion_main!(benches);
