//! Two-body circular orbit — closure and energy check.
//!
//! Integrates an equal-mass binary for one period and checks that both
//! bodies return to their starting points with conserved energy.
//!
//! Run with:
//!   cargo run --example two_body_orbit

use threebody::diagnostics::{linear_momentum, total_energy};
use threebody::{NewtonianGravity, Rk4, TimeGrid};

fn main() {
    let g = 1.0;
    let masses = vec![1.0, 1.0];
    let separation = 1.0;
    let model = NewtonianGravity::new(g, masses).unwrap();
    let layout = model.layout();

    // Each body moves at half the relative circular speed sqrt(G M / d)
    let total_mass: f64 = model.masses().iter().sum();
    let v = 0.5 * (g * total_mass / separation).sqrt();
    let y0: [f64; 12] = layout
        .pack(
            &[[-separation / 2.0, 0.0, 0.0], [separation / 2.0, 0.0, 0.0]],
            &[[0.0, -v, 0.0], [0.0, v, 0.0]],
        )
        .unwrap();

    // Orbital period: T = 2π √(d³ / (G M))
    let period = 2.0 * std::f64::consts::PI * (separation.powi(3) / (g * total_mass)).sqrt();
    let steps = 500;
    let grid = TimeGrid::from_samples(
        (0..=steps)
            .map(|i| period * i as f64 / steps as f64)
            .collect(),
    )
    .unwrap();

    let mut solver = Rk4::new();
    let trajectory = solver.integrate(&model, &y0, &grid).unwrap();
    let yf = trajectory.final_state();

    let e0 = total_energy(&model, &y0);
    let ef = total_energy(&model, yf);

    println!("Two-Body Circular Orbit");
    println!("  Separation: {separation}");
    println!("  Speed:      {v:.6}");
    println!("  Period:     {period:.6}");
    println!("  Steps:      {steps}");
    println!();
    for body in 0..layout.bodies() {
        let r0 = layout.position(&y0, body);
        let rf = layout.position(yf, body);
        let err = ((rf[0] - r0[0]).powi(2) + (rf[1] - r0[1]).powi(2) + (rf[2] - r0[2]).powi(2))
            .sqrt();
        println!("  Body {body} return error: {err:.2e}");
    }
    println!(
        "  Energy drift: {:.2e}  (relative: {:.2e})",
        (ef - e0).abs(),
        ((ef - e0) / e0).abs()
    );
    println!("  Final momentum: {:?}", linear_momentum(&model, yf));
    println!();
    println!("  Steps taken:    {}", solver.stats.steps);
    println!("  Function evals: {}", solver.stats.fn_evals);
}
