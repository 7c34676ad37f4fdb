//! Coupling engine benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

use membrane_sim::lattice::ParticleGenerator;
use membrane_sim::membrane::single_slit;
use membrane_sim::Membrane;

fn bench_flat_coupling(c: &mut Criterion) {
    let mut membrane = Membrane::new(
        100,
        50,
        Vec3::ZERO,
        Vec3::new(0.01, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.01),
        ParticleGenerator::uniform(1.0),
        |d| -100.0 * d,
    )
    .expect("valid membrane geometry");
    membrane.offset_along_dof(50, 25, 0.1);

    c.bench_function("flat_coupling_100x50", |b| {
        b.iter(|| black_box(&mut membrane).apply_forces())
    });
}

fn bench_single_slit_coupling(c: &mut Criterion) {
    let mut membrane = single_slit().expect("preset geometry is valid");
    membrane.offset_along_dof(50, 10, 0.1);

    c.bench_function("single_slit_coupling_100x50", |b| {
        b.iter(|| black_box(&mut membrane).apply_forces())
    });
}

criterion_group!(benches, bench_flat_coupling, bench_single_slit_coupling);
criterion_main!(benches);
