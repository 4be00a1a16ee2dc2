use bouncing_circles::{Placement, Simulation, SimulationConfig, Vector2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn grid_config(count: usize) -> SimulationConfig {
    let per_row = 20;
    let centers = (0..count)
        .map(|i| Vector2::new(20.0 + (i % per_row) as f32 * 60.0, 20.0 + (i / per_row) as f32 * 60.0))
        .collect();

    SimulationConfig::default()
        .with_viewport(1280.0, 1280.0)
        .with_radius(15.0)
        .with_placement(Placement::Explicit(centers))
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");
    for &count in &[5usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut sim = Simulation::new(grid_config(count)).expect("valid benchmark config");
            b.iter(|| {
                sim.step();
                black_box(sim.kinetic_energy())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
