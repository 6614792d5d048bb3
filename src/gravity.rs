//! Newtonian point-mass gravity
//!
//! [`NewtonianGravity`] is the force model for a fixed set of bodies. Its
//! right-hand side maps a flat state (see [`crate::state`]) to its time
//! derivative: the position half of the derivative is the velocity half of
//! the state, and the velocity half is the pairwise inverse-square
//! acceleration
//!
//! ```text
//! a_i = Σ_{j≠i} G m_j (r_j - r_i) / |r_j - r_i|³
//! ```
//!
//! There is no softening. Two bodies at exactly the same position give a
//! zero distance, and the resulting NaN/inf is passed through to the caller.

use crate::solver::{IntegrationError, OdeSystem};
use crate::state::{StateLayout, DIM};

/// Direct-summation Newtonian gravity between point masses
///
/// `G` and the masses are fixed at construction, so several independent
/// systems can be integrated side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonianGravity {
    g: f64,
    masses: Vec<f64>,
    layout: StateLayout,
}

impl NewtonianGravity {
    /// Create a gravity model with gravitational constant `g` and one mass
    /// per body.
    ///
    /// # Errors
    /// `InvalidInput` if `masses` is empty or any value is non-finite.
    pub fn new(g: f64, masses: Vec<f64>) -> Result<Self, IntegrationError> {
        if masses.is_empty() {
            return Err(IntegrationError::InvalidInput {
                message: "at least one body mass is required".to_string(),
            });
        }
        if !g.is_finite() {
            return Err(IntegrationError::InvalidInput {
                message: format!("G must be finite, got {}", g),
            });
        }
        for (i, &m) in masses.iter().enumerate() {
            if !m.is_finite() {
                return Err(IntegrationError::InvalidInput {
                    message: format!("mass[{}] is not finite", i),
                });
            }
        }

        let layout = StateLayout::new(masses.len());
        Ok(Self { g, masses, layout })
    }

    /// Gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Body masses in body order
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Number of bodies
    pub fn bodies(&self) -> usize {
        self.masses.len()
    }

    /// State layout this model reads and writes
    pub fn layout(&self) -> StateLayout {
        self.layout
    }
}

impl<const N: usize> OdeSystem<N> for NewtonianGravity {
    /// # Panics
    /// If `N != 6 * bodies()`. [`Rk4`](crate::Rk4) rejects such a state
    /// through `check_dimension` before the first evaluation.
    fn rhs(&self, _t: f64, y: &[f64; N], dydt: &mut [f64; N]) {
        let bodies = self.masses.len();
        let half = DIM * bodies;

        // dr/dt = v
        dydt[..half].copy_from_slice(&y[half..]);
        // dv/dt accumulated pairwise below
        dydt[half..].fill(0.0);

        for i in 0..bodies {
            let ri = self.layout.position(y, i);
            let vi = self.layout.velocity_offset(i);
            for j in (i + 1)..bodies {
                let rj = self.layout.position(y, j);
                let vj = self.layout.velocity_offset(j);

                let r = [rj[0] - ri[0], rj[1] - ri[1], rj[2] - ri[2]];
                let d = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
                let d3 = d * d * d;

                let gi = self.g * self.masses[j] / d3;
                let gj = self.g * self.masses[i] / d3;
                for k in 0..DIM {
                    dydt[vi + k] += gi * r[k];
                    dydt[vj + k] -= gj * r[k];
                }
            }
        }
    }

    fn check_dimension(&self) -> Result<(), IntegrationError> {
        self.layout.check_len(N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bodies(dist: f64) -> [f64; 12] {
        StateLayout::new(2)
            .pack(
                &[[-dist / 2.0, 0.0, 0.0], [dist / 2.0, 0.0, 0.0]],
                &[[0.0, 1.0, 0.0], [0.0, -2.0, 0.5]],
            )
            .unwrap()
    }

    #[test]
    fn test_velocity_pass_through() {
        let model = NewtonianGravity::new(1.0, vec![1.0, 1.0]).unwrap();
        let y = two_bodies(2.0);
        let mut dydt = [0.0; 12];
        model.rhs(0.0, &y, &mut dydt);
        assert_eq!(&dydt[..6], &y[6..]);
    }

    #[test]
    fn test_inverse_square_magnitude() {
        let g = 0.5;
        let model = NewtonianGravity::new(g, vec![2.0, 3.0]).unwrap();
        let y = two_bodies(2.0);
        let mut dydt = [0.0; 12];
        model.rhs(0.0, &y, &mut dydt);

        // a_0 = G m_1 / d² toward +x, a_1 = G m_0 / d² toward -x
        assert!((dydt[6] - g * 3.0 / 4.0).abs() < 1e-15, "a0x = {}", dydt[6]);
        assert!((dydt[9] + g * 2.0 / 4.0).abs() < 1e-15, "a1x = {}", dydt[9]);
        assert_eq!(dydt[7], 0.0);
        assert_eq!(dydt[11], 0.0);
    }

    #[test]
    fn test_newton_third_law() {
        let model = NewtonianGravity::new(1.0, vec![1.0, 2.5, 0.7]).unwrap();
        let y: [f64; 18] = model
            .layout()
            .pack(
                &[[0.3, -1.2, 0.4], [2.0, 0.1, -0.3], [-0.8, 0.9, 1.1]],
                &[[0.0; 3]; 3],
            )
            .unwrap();
        let mut dydt = [0.0; 18];
        model.rhs(0.0, &y, &mut dydt);

        // Σ m_i a_i = 0
        for k in 0..3 {
            let total: f64 = (0..3)
                .map(|i| model.masses()[i] * dydt[model.layout().velocity_offset(i) + k])
                .sum();
            assert!(total.abs() < 1e-14, "net force component {} = {}", k, total);
        }
    }

    #[test]
    fn test_time_argument_is_ignored() {
        let model = NewtonianGravity::new(1.0, vec![1.0, 1.0]).unwrap();
        let y = two_bodies(1.5);
        let mut a = [0.0; 12];
        let mut b = [0.0; 12];
        model.rhs(0.0, &y, &mut a);
        model.rhs(123.0, &y, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coincident_bodies_are_not_regularized() {
        let model = NewtonianGravity::new(1.0, vec![1.0, 1.0]).unwrap();
        let y = two_bodies(0.0);
        let mut dydt = [0.0; 12];
        model.rhs(0.0, &y, &mut dydt);
        assert!(dydt[6..].iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_dimension_check() {
        let model = NewtonianGravity::new(1.0, vec![1.0; 3]).unwrap();
        assert!(OdeSystem::<18>::check_dimension(&model).is_ok());
        assert_eq!(
            OdeSystem::<12>::check_dimension(&model),
            Err(IntegrationError::DimensionMismatch {
                expected: 18,
                actual: 12
            })
        );
    }

    #[test]
    fn test_invalid_construction() {
        assert!(NewtonianGravity::new(1.0, vec![]).is_err());
        assert!(NewtonianGravity::new(f64::NAN, vec![1.0]).is_err());
        assert!(NewtonianGravity::new(1.0, vec![1.0, f64::INFINITY]).is_err());
    }
}
