//! Classical Runge-Kutta 4 Coefficients
//!
//! Butcher tableau of the classical fourth-order Runge-Kutta method:
//!
//! ```text
//!   0  |
//!  1/2 | 1/2
//!  1/2 |  0   1/2
//!   1  |  0    0    1
//! -----+--------------------
//!      | 1/6  1/3  1/3  1/6
//! ```
//!
//! Reference: Hairer, Nørsett & Wanner, "Solving Ordinary Differential
//! Equations I", Table II.1.2.

/// Number of stages in the RK4 method
pub const STAGES: usize = 4;

/// Order of the method (global error is O(h^ORDER))
pub const ORDER: u8 = 4;

/// Node coefficients (c_i) - stage i is evaluated at t_n + c[i]*h
pub const C: [f64; STAGES] = [0.0, 0.5, 0.5, 1.0];

/// Stage coupling coefficients (a_ij), strictly lower triangular
///
/// Stage i state: y_n + h * sum_{j<i} a[i][j] * k[j]
pub const A: [[f64; STAGES]; STAGES] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, 0.0],
    [0.0, 0.5, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
];

/// Weights (b_i) of the stage derivatives in the step update
pub const B: [f64; STAGES] = [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0];
