//! Classical Runge-Kutta 4 Integrator
//!
//! A fixed-step, 4-stage explicit Runge-Kutta method. Each step evaluates
//! the right-hand side four times and combines the stages with the weights
//! from [`crate::coefficients`]. Local truncation error is O(h^5), global
//! error O(h^4), as long as the right-hand side is smooth over the step.
//!
//! There is no step-size control: the caller chooses the sample times
//! through a [`TimeGrid`], and the solver takes exactly one step per
//! consecutive pair of samples.

use thiserror::Error;

use crate::coefficients::{A, B, C, STAGES};
use crate::grid::TimeGrid;
use crate::trajectory::Trajectory;

/// System of ordinary differential equations: dy/dt = f(t, y)
pub trait OdeSystem<const N: usize> {
    /// Evaluate the right-hand side of the ODE system
    ///
    /// # Arguments
    /// * `t` - Current time
    /// * `y` - Current state vector
    /// * `dydt` - Output: derivative dy/dt
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]);

    /// Check that the system accepts a state of length `N`.
    ///
    /// Called once before integration starts. Systems whose state length
    /// depends on runtime parameters (such as a body count) override this
    /// to reject a mismatched `N`.
    fn check_dimension(&self) -> Result<(), IntegrationError> {
        Ok(())
    }
}

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// Total number of function evaluations
    pub fn_evals: u64,
    /// Number of steps taken
    pub steps: u64,
}

/// Classical fixed-step Runge-Kutta 4 integrator
///
/// # Type Parameters
/// * `N` - Dimension of the state vector
///
/// # Example
/// ```
/// use threebody::{OdeSystem, Rk4, TimeGrid};
///
/// struct HarmonicOscillator { omega: f64 }
///
/// impl OdeSystem<2> for HarmonicOscillator {
///     fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
///         dydt[0] = y[1];
///         dydt[1] = -self.omega * self.omega * y[0];
///     }
/// }
///
/// let sys = HarmonicOscillator { omega: 1.0 };
/// let grid = TimeGrid::uniform(1.0, 0.01).unwrap();
/// let mut solver = Rk4::new();
///
/// let trajectory = solver.integrate(&sys, &[1.0, 0.0], &grid).unwrap();
/// assert_eq!(trajectory.len(), 101);
/// ```
#[derive(Clone)]
pub struct Rk4<const N: usize> {
    /// Stage evaluations (pre-allocated workspace)
    k: [[f64; N]; STAGES],
    /// Integration statistics
    pub stats: Stats,
}

impl<const N: usize> Default for Rk4<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Rk4<N> {
    /// Create a new RK4 solver
    pub fn new() -> Self {
        Self {
            k: [[0.0; N]; STAGES],
            stats: Stats::default(),
        }
    }

    /// Perform a single step of size `h` from `(t, y)`.
    ///
    /// Returns the state at `t + h`. Non-finite values produced by the
    /// right-hand side are carried into the result unchanged.
    ///
    /// Unlike [`integrate`](Self::integrate) and [`propagate`](Self::propagate),
    /// this does not call `sys.check_dimension()`; use [`check`](Self::check)
    /// first when `N` comes from outside.
    ///
    /// # Panics
    /// If the system cannot handle a state of length `N` (for
    /// [`NewtonianGravity`](crate::NewtonianGravity), when `N` is not six
    /// times the body count).
    pub fn step<S: OdeSystem<N>>(&mut self, sys: &S, t: f64, y: &[f64; N], h: f64) -> [f64; N] {
        self.compute_stages(sys, t, y, h);
        let y_new = self.compute_solution(y, h);

        self.stats.fn_evals += STAGES as u64;
        self.stats.steps += 1;

        y_new
    }

    /// Integrate over every sample of `grid`, starting from `y0` at
    /// `grid.start()`.
    ///
    /// Row 0 of the returned trajectory is a copy of `y0`; row `i + 1` is one
    /// RK4 step from row `i` with `h = t[i+1] - t[i]`. The trajectory buffer is
    /// allocated once at the grid's length.
    ///
    /// Numerical blow-up (for instance two bodies at the same point) is not
    /// an error: non-finite values propagate into the remaining rows, and the
    /// caller can locate them with [`Trajectory::first_non_finite`].
    ///
    /// # Errors
    /// * `EmptyState` if `N == 0`
    /// * whatever `sys.check_dimension()` reports, typically `DimensionMismatch`
    pub fn integrate<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        y0: &[f64; N],
        grid: &TimeGrid,
    ) -> Result<Trajectory<N>, IntegrationError> {
        self.validate_inputs(sys)?;

        let t = grid.samples();
        let mut states = vec![[0.0; N]; t.len()];
        states[0] = *y0;

        log::debug!(
            "integrating {} steps over [{}, {}]",
            grid.steps(),
            grid.start(),
            grid.end()
        );

        let mut warned = !is_finite_state(y0);
        for i in 0..grid.steps() {
            let h = t[i + 1] - t[i];
            let y_next = self.step(sys, t[i], &states[i], h);
            if !warned && !is_finite_state(&y_next) {
                log::warn!("non-finite state at t = {} (row {})", t[i + 1], i + 1);
                warned = true;
            }
            states[i + 1] = y_next;
        }

        log::debug!("integration finished: {:?}", self.stats);

        Ok(Trajectory::new(t.to_vec(), states))
    }

    /// Advance `y0` from `t0` to `tf` with fixed step `h`, keeping only the
    /// final state.
    ///
    /// Steps are taken on the same samples [`TimeGrid::uniform`] would
    /// produce for `tf - t0`, so the returned time is never before `tf`.
    ///
    /// # Returns
    /// `(t_final, y_final)`
    pub fn propagate<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t0: f64,
        y0: &[f64; N],
        tf: f64,
        h: f64,
    ) -> Result<(f64, [f64; N]), IntegrationError> {
        self.validate_inputs(sys)?;
        if !t0.is_finite() {
            return Err(IntegrationError::InvalidInput {
                message: format!("t0 must be finite, got {}", t0),
            });
        }
        let grid = TimeGrid::uniform(tf - t0, h)?;

        let mut y = *y0;
        for pair in grid.samples().windows(2) {
            y = self.step(sys, t0 + pair[0], &y, pair[1] - pair[0]);
        }

        Ok((t0 + grid.end(), y))
    }

    /// Compute all 4 stages
    #[allow(clippy::needless_range_loop)]
    fn compute_stages<S: OdeSystem<N>>(&mut self, sys: &S, t: f64, y: &[f64; N], h: f64) {
        let mut y_temp = [0.0; N];

        // Stage 0: k[0] = f(t, y)
        sys.rhs(t, y, &mut self.k[0]);

        for i in 1..STAGES {
            // y_temp = y + h * sum_{j<i} a[i][j] * k[j], skipping zero couplings
            y_temp.copy_from_slice(y);
            for j in 0..i {
                let a = A[i][j];
                if a == 0.0 {
                    continue;
                }
                for n in 0..N {
                    y_temp[n] += h * a * self.k[j][n];
                }
            }

            sys.rhs(t + C[i] * h, &y_temp, &mut self.k[i]);
        }
    }

    /// Combine the stages: y + h * sum_i b[i] * k[i]
    #[allow(clippy::needless_range_loop)]
    fn compute_solution(&self, y: &[f64; N], h: f64) -> [f64; N] {
        let mut y_new = [0.0; N];

        for n in 0..N {
            let mut sum = 0.0;
            for i in 0..STAGES {
                sum += B[i] * self.k[i][n];
            }
            y_new[n] = y[n] + h * sum;
        }

        y_new
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Check that `sys` can be stepped with states of length `N`
    ///
    /// # Errors
    /// `EmptyState` if `N == 0`, otherwise whatever `sys.check_dimension()`
    /// reports.
    pub fn check<S: OdeSystem<N>>(&self, sys: &S) -> Result<(), IntegrationError> {
        self.validate_inputs(sys)
    }

    /// Validate integration inputs
    fn validate_inputs<S: OdeSystem<N>>(&self, sys: &S) -> Result<(), IntegrationError> {
        if N == 0 {
            return Err(IntegrationError::EmptyState);
        }
        sys.check_dimension()
    }
}

fn is_finite_state(y: &[f64]) -> bool {
    y.iter().all(|v| v.is_finite())
}

/// Errors that can occur during integration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// State vector has no components
    #[error("State vector is empty")]
    EmptyState,
    /// State length does not match what the system expects
    #[error("State length {actual} does not match expected length {expected}")]
    DimensionMismatch {
        /// Length the system expects
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
    /// Time grid is empty, non-finite or not strictly increasing
    #[error("Invalid time grid: {message}")]
    InvalidTimeGrid {
        /// Description of the problem
        message: String,
    },
    /// Invalid input parameters
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },
}
