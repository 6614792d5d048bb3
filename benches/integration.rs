use criterion::{black_box, criterion_group, criterion_main, Criterion};
use threebody::{NewtonianGravity, OdeSystem, Rk4, ScenarioConfig, TimeGrid};

fn bench_reference_scenario(c: &mut Criterion) {
    let scenario = ScenarioConfig::reference().build::<18>().unwrap();

    c.bench_function("reference_scenario_351_rows", |b| {
        b.iter(|| {
            let mut solver = Rk4::new();
            solver
                .integrate(
                    &scenario.model,
                    black_box(&scenario.initial_state),
                    &scenario.grid,
                )
                .unwrap()
        })
    });
}

fn bench_circular_binary_1period(c: &mut Criterion) {
    let model = NewtonianGravity::new(1.0, vec![1.0, 1.0]).unwrap();
    let v = 0.5 * 2f64.sqrt();
    let y0: [f64; 12] = model
        .layout()
        .pack(
            &[[-0.5, 0.0, 0.0], [0.5, 0.0, 0.0]],
            &[[0.0, -v, 0.0], [0.0, v, 0.0]],
        )
        .unwrap();
    let period = 2.0 * std::f64::consts::PI / 2f64.sqrt();

    c.bench_function("circular_binary_1period_propagate", |b| {
        b.iter(|| {
            let mut solver = Rk4::new();
            solver
                .propagate(&model, 0.0, black_box(&y0), period, 1e-3)
                .unwrap()
        })
    });
}

fn bench_gravity_rhs(c: &mut Criterion) {
    let scenario = ScenarioConfig::reference().build::<18>().unwrap();
    let mut dydt = [0.0; 18];

    c.bench_function("gravity_rhs_3_bodies", |b| {
        b.iter(|| {
            scenario
                .model
                .rhs(0.0, black_box(&scenario.initial_state), &mut dydt);
            dydt
        })
    });
}

fn bench_uniform_grid(c: &mut Criterion) {
    c.bench_function("uniform_grid_100k", |b| {
        b.iter(|| TimeGrid::uniform(black_box(1000.0), 0.01).unwrap())
    });
}

criterion_group!(
    benches,
    bench_reference_scenario,
    bench_circular_binary_1period,
    bench_gravity_rhs,
    bench_uniform_grid
);
criterion_main!(benches);
