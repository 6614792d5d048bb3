//! State vector layout
//!
//! The state of a system of `B` bodies is a flat `[f64; 6B]`: all positions
//! first (three components per body, in body order), then all velocities in
//! the same order.
//!
//! ```text
//! [ x0 y0 z0 | x1 y1 z1 | ... | vx0 vy0 vz0 | vx1 vy1 vz1 | ... ]
//!   <------- positions ------->  <---------- velocities --------->
//! ```
//!
//! The force model and the code that seeds the initial condition both go
//! through [`StateLayout`], so the offsets cannot drift apart.

use crate::solver::IntegrationError;

/// Spatial dimension of each body's position and velocity
pub const DIM: usize = 3;

/// Offsets of each body's position and velocity inside a flat state vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateLayout {
    bodies: usize,
}

impl StateLayout {
    /// Layout for `bodies` bodies
    pub fn new(bodies: usize) -> Self {
        Self { bodies }
    }

    /// Number of bodies
    pub fn bodies(&self) -> usize {
        self.bodies
    }

    /// Length of the state vector (`6B`)
    pub fn len(&self) -> usize {
        2 * DIM * self.bodies
    }

    /// `true` for a layout with no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies == 0
    }

    /// Offset of body `i`'s position
    pub fn position_offset(&self, i: usize) -> usize {
        DIM * i
    }

    /// Offset of body `i`'s velocity
    pub fn velocity_offset(&self, i: usize) -> usize {
        DIM * (self.bodies + i)
    }

    /// Position of body `i`
    pub fn position(&self, y: &[f64], i: usize) -> [f64; DIM] {
        let o = self.position_offset(i);
        [y[o], y[o + 1], y[o + 2]]
    }

    /// Velocity of body `i`
    pub fn velocity(&self, y: &[f64], i: usize) -> [f64; DIM] {
        let o = self.velocity_offset(i);
        [y[o], y[o + 1], y[o + 2]]
    }

    /// Check that a state of length `n` matches this layout
    pub fn check_len(&self, n: usize) -> Result<(), IntegrationError> {
        if n != self.len() {
            return Err(IntegrationError::DimensionMismatch {
                expected: self.len(),
                actual: n,
            });
        }
        Ok(())
    }

    /// Pack per-body positions and velocities into a flat state vector
    ///
    /// # Errors
    /// `DimensionMismatch` if `N != 6B`, `InvalidInput` if either slice does
    /// not hold exactly one entry per body.
    pub fn pack<const N: usize>(
        &self,
        positions: &[[f64; DIM]],
        velocities: &[[f64; DIM]],
    ) -> Result<[f64; N], IntegrationError> {
        self.check_len(N)?;
        if positions.len() != self.bodies || velocities.len() != self.bodies {
            return Err(IntegrationError::InvalidInput {
                message: format!(
                    "expected {} positions and velocities, got {} and {}",
                    self.bodies,
                    positions.len(),
                    velocities.len()
                ),
            });
        }

        let mut y = [0.0; N];
        for (i, (r, v)) in positions.iter().zip(velocities).enumerate() {
            let p = self.position_offset(i);
            let q = self.velocity_offset(i);
            y[p..p + DIM].copy_from_slice(r);
            y[q..q + DIM].copy_from_slice(v);
        }
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_body_offsets() {
        let layout = StateLayout::new(3);
        assert_eq!(layout.len(), 18);
        assert_eq!(layout.position_offset(0), 0);
        assert_eq!(layout.position_offset(2), 6);
        assert_eq!(layout.velocity_offset(0), 9);
        assert_eq!(layout.velocity_offset(2), 15);
    }

    #[test]
    fn test_pack_places_halves() {
        let layout = StateLayout::new(2);
        let y: [f64; 12] = layout
            .pack(
                &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
                &[[-1.0, -2.0, -3.0], [-4.0, -5.0, -6.0]],
            )
            .unwrap();
        assert_eq!(
            y,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0]
        );
        assert_eq!(layout.position(&y, 1), [4.0, 5.0, 6.0]);
        assert_eq!(layout.velocity(&y, 0), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_pack_wrong_state_length() {
        let layout = StateLayout::new(3);
        let result: Result<[f64; 12], _> = layout.pack(&[[0.0; 3]; 3], &[[0.0; 3]; 3]);
        assert!(matches!(
            result,
            Err(IntegrationError::DimensionMismatch {
                expected: 18,
                actual: 12
            })
        ));
    }

    #[test]
    fn test_pack_wrong_body_count() {
        let layout = StateLayout::new(3);
        let result: Result<[f64; 18], _> = layout.pack(&[[0.0; 3]; 2], &[[0.0; 3]; 3]);
        assert!(matches!(result, Err(IntegrationError::InvalidInput { .. })));
    }
}
