//! Integrated trajectories
//!
//! A [`Trajectory`] is the read-only table produced by
//! [`Rk4::integrate`](crate::Rk4::integrate): one state vector per time-grid
//! sample, row 0 being the initial condition.

use std::io::{self, Write};

use crate::state::{StateLayout, DIM};

/// Table of integrated states, one row per time sample
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize> {
    times: Vec<f64>,
    states: Vec<[f64; N]>,
}

impl<const N: usize> Trajectory<N> {
    /// Assemble a trajectory. `times` and `states` must have the same,
    /// non-zero, length.
    pub(crate) fn new(times: Vec<f64>, states: Vec<[f64; N]>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        debug_assert!(!times.is_empty());
        Self { times, states }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; a trajectory holds at least its initial state
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sample times, one per row
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// All rows in time order
    pub fn states(&self) -> &[[f64; N]] {
        &self.states
    }

    /// State at row `i`
    ///
    /// # Panics
    /// If `i >= len()`.
    pub fn row(&self, i: usize) -> &[f64; N] {
        &self.states[i]
    }

    /// Row 0, the initial condition
    pub fn initial_state(&self) -> &[f64; N] {
        &self.states[0]
    }

    /// Last row
    pub fn final_state(&self) -> &[f64; N] {
        &self.states[self.states.len() - 1]
    }

    /// Iterate over `(t, state)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64; N])> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Position of `body` at every sample, for drawing trails and markers
    pub fn positions(
        &self,
        layout: StateLayout,
        body: usize,
    ) -> impl Iterator<Item = [f64; DIM]> + '_ {
        self.states.iter().map(move |y| layout.position(y, body))
    }

    /// Index of the first row that holds a NaN or infinite entry
    pub fn first_non_finite(&self) -> Option<usize> {
        self.states
            .iter()
            .position(|y| y.iter().any(|v| !v.is_finite()))
    }

    /// Write the table as CSV.
    ///
    /// Columns are `t`, then `x{b},y{b},z{b}` for each body's position, then
    /// `vx{b},vy{b},vz{b}` for each body's velocity, matching `layout`.
    ///
    /// # Errors
    /// `InvalidInput` if `layout` does not describe a state of length `N`,
    /// otherwise any error from `out`.
    pub fn write_csv<W: Write>(&self, layout: StateLayout, mut out: W) -> io::Result<()> {
        layout
            .check_len(N)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        write!(out, "t")?;
        for b in 0..layout.bodies() {
            write!(out, ",x{b},y{b},z{b}")?;
        }
        for b in 0..layout.bodies() {
            write!(out, ",vx{b},vy{b},vz{b}")?;
        }
        writeln!(out)?;

        for (t, y) in self.iter() {
            write!(out, "{}", t)?;
            for v in y {
                write!(out, ",{}", v)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
