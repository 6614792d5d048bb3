//! Reference three-body run.
//!
//! Integrates the built-in scenario (three unit masses, G = 1, T = 3.5,
//! h = 0.01) and prints each body's track at a coarse stride, the way a
//! plotting front end would consume it.
//!
//! Run with:
//!   cargo run --example three_body

use threebody::diagnostics::relative_energy_drift;
use threebody::{Rk4, ScenarioConfig};

fn main() {
    let scenario = ScenarioConfig::reference().build::<18>().unwrap();
    let layout = scenario.model.layout();

    let trajectory = Rk4::new()
        .integrate(&scenario.model, &scenario.initial_state, &scenario.grid)
        .unwrap();

    println!("Three-Body Reference Run");
    println!("  Rows: {}", trajectory.len());
    println!();

    let stride = 35;
    for body in 0..layout.bodies() {
        println!("  Body {body}:");
        let times = trajectory.times().iter().step_by(stride);
        for (t, r) in times.zip(trajectory.positions(layout, body).step_by(stride)) {
            println!("    t = {t:>5.2}  x = {:>9.4}  y = {:>9.4}", r[0], r[1]);
        }
    }
    println!();

    match trajectory.first_non_finite() {
        Some(row) => println!("  Non-finite state from row {row}"),
        None => println!(
            "  Relative energy drift: {:.2e}",
            relative_energy_drift(&scenario.model, &trajectory)
        ),
    }
}
