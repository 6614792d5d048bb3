//! Step-size refinement study.
//!
//! Integrates a circular binary for one period at successively halved step
//! sizes. For a fourth-order method the endpoint error should drop by about
//! 2^4 = 16 at each halving.
//!
//! Run with:
//!   cargo run --example convergence

use threebody::{NewtonianGravity, Rk4};

fn main() {
    let model = NewtonianGravity::new(1.0, vec![1.0, 1.0]).unwrap();
    let layout = model.layout();
    let v = 0.5 * 2f64.sqrt();
    let y0: [f64; 12] = layout
        .pack(
            &[[-0.5, 0.0, 0.0], [0.5, 0.0, 0.0]],
            &[[0.0, -v, 0.0], [0.0, v, 0.0]],
        )
        .unwrap();
    let period = 2.0 * std::f64::consts::PI / 2f64.sqrt();

    println!("{:>8}  {:>12}  {:>12}  {:>8}", "steps", "h", "error", "ratio");
    let mut previous: Option<f64> = None;
    for steps in [50, 100, 200, 400, 800] {
        let h = period / steps as f64;
        let mut solver = Rk4::new();
        let (tf, yf) = solver.propagate(&model, 0.0, &y0, period, h).unwrap();

        // Analytic position of body 0 at tf
        let omega = 2.0 * std::f64::consts::PI / period;
        let exact = [-0.5 * (omega * tf).cos(), -0.5 * (omega * tf).sin(), 0.0];
        let r = layout.position(&yf, 0);
        let err = ((r[0] - exact[0]).powi(2) + (r[1] - exact[1]).powi(2)).sqrt();

        match previous {
            Some(p) => println!("{steps:>8}  {h:>12.4e}  {err:>12.4e}  {:>8.2}", p / err),
            None => println!("{steps:>8}  {h:>12.4e}  {err:>12.4e}  {:>8}", "-"),
        }
        previous = Some(err);
    }
}
