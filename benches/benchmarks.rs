/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbitals_rs::coordinates::{CoordinateSystem, Resolution};
use orbitals_rs::grid::GridVolume;
use orbitals_rs::wavefunction::QuantumNumbers;

fn evaluation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Volume Evaluation");
    let qn = QuantumNumbers::new(3, 2, 1).unwrap();

    group.bench_function("evaluate_radial_30", |b| {
        b.iter(|| {
            black_box(
                GridVolume::new_atomic_wavefunction(
                    CoordinateSystem::Radial,
                    Resolution::uniform(CoordinateSystem::Radial, 30),
                    black_box(1.0),
                    qn,
                )
                .unwrap(),
            )
        })
    });

    group.bench_function("evaluate_cartesian_30", |b| {
        b.iter(|| {
            black_box(
                GridVolume::new_atomic_wavefunction(
                    CoordinateSystem::Cartesian,
                    Resolution::uniform(CoordinateSystem::Cartesian, 30),
                    black_box(1.0),
                    qn,
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

fn interpolation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Volume Interpolation");
    let qn = QuantumNumbers::new(3, 2, 1).unwrap();
    let coarse = GridVolume::new_atomic_wavefunction(
        CoordinateSystem::Radial,
        Resolution::uniform(CoordinateSystem::Radial, 10),
        1.0,
        qn,
    )
    .unwrap();
    let target = Resolution::uniform(CoordinateSystem::Radial, 30);

    group.bench_function("interpolate_radial_10_to_30", |b| {
        b.iter(|| black_box(coarse.interpolate(black_box(&target)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, evaluation_benchmark, interpolation_benchmark);
criterion_main!(benches);
