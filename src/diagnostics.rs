//! Conserved quantities of a gravitating system
//!
//! RK4 is not symplectic, so energy drifts slowly even on smooth
//! trajectories. These helpers measure that drift; they never correct it.

use crate::gravity::NewtonianGravity;
use crate::state::DIM;
use crate::trajectory::Trajectory;

/// Total mechanical energy: kinetic minus pairwise potential
///
/// ```text
/// E = Σ_i ½ m_i |v_i|² - Σ_{i<j} G m_i m_j / |r_j - r_i|
/// ```
pub fn total_energy(model: &NewtonianGravity, y: &[f64]) -> f64 {
    let layout = model.layout();
    let m = model.masses();

    let mut kinetic = 0.0;
    let mut potential = 0.0;
    for i in 0..m.len() {
        let v = layout.velocity(y, i);
        kinetic += 0.5 * m[i] * dot(&v, &v);

        let ri = layout.position(y, i);
        for j in (i + 1)..m.len() {
            let rj = layout.position(y, j);
            let r = sub(&rj, &ri);
            potential -= model.g() * m[i] * m[j] / dot(&r, &r).sqrt();
        }
    }
    kinetic + potential
}

/// Total linear momentum Σ m_i v_i
pub fn linear_momentum(model: &NewtonianGravity, y: &[f64]) -> [f64; DIM] {
    let layout = model.layout();
    let mut p = [0.0; DIM];
    for (i, &m) in model.masses().iter().enumerate() {
        let v = layout.velocity(y, i);
        for k in 0..DIM {
            p[k] += m * v[k];
        }
    }
    p
}

/// Mass-weighted mean position
pub fn center_of_mass(model: &NewtonianGravity, y: &[f64]) -> [f64; DIM] {
    let layout = model.layout();
    let total: f64 = model.masses().iter().sum();
    let mut c = [0.0; DIM];
    for (i, &m) in model.masses().iter().enumerate() {
        let r = layout.position(y, i);
        for k in 0..DIM {
            c[k] += m * r[k] / total;
        }
    }
    c
}

/// Relative energy change between the first and last rows, `|E_f - E_0| / |E_0|`
///
/// Not meaningful for a system whose initial energy is exactly zero (a
/// parabolic configuration): the result is then infinite, or NaN if the
/// final energy is zero too. Compare [`total_energy`] values directly in
/// that case.
pub fn relative_energy_drift<const N: usize>(
    model: &NewtonianGravity,
    trajectory: &Trajectory<N>,
) -> f64 {
    let e0 = total_energy(model, trajectory.initial_state());
    let ef = total_energy(model, trajectory.final_state());
    (ef - e0).abs() / e0.abs()
}

fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn sub(a: &[f64; DIM], b: &[f64; DIM]) -> [f64; DIM] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
