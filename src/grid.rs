//! Time grids
//!
//! A [`TimeGrid`] is the ordered, strictly increasing sequence of sample
//! instants at which a trajectory is reported. The integrator takes one
//! RK4 step per consecutive pair of samples, so the grid also fixes the
//! step sizes.

use crate::solver::IntegrationError;

/// Relative slack applied to `t_end / h` before rounding up, so that a
/// ratio like `3.5 / 0.01` does not gain a spurious extra sample from
/// representation error.
const RATIO_SLACK: f64 = 1e-9;

/// Largest number of steps a uniform grid may hold
pub const MAX_STEPS: usize = 100_000_000;

/// Ordered, strictly increasing sequence of sample times
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Uniform grid spanning `[0, t_end]` with fixed step `h`.
    ///
    /// Samples are `t_i = i * h` for `i = 0..=n` where `n = ceil(t_end / h)`.
    /// The final sample is never below `t_end`. A zero `t_end` gives the
    /// single sample `[0.0]`.
    ///
    /// # Errors
    /// `InvalidTimeGrid` if `t_end` is negative or non-finite, `h` is not a
    /// positive finite number, or `t_end / h` needs more than [`MAX_STEPS`]
    /// steps.
    pub fn uniform(t_end: f64, h: f64) -> Result<Self, IntegrationError> {
        if !t_end.is_finite() || t_end < 0.0 {
            return Err(IntegrationError::InvalidTimeGrid {
                message: format!("t_end must be finite and non-negative, got {}", t_end),
            });
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(IntegrationError::InvalidTimeGrid {
                message: format!("step h must be finite and positive, got {}", h),
            });
        }

        let ratio = t_end / h;
        let steps = (ratio - RATIO_SLACK * ratio.max(1.0)).ceil().max(0.0);
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(IntegrationError::InvalidTimeGrid {
                message: format!(
                    "t_end / h = {} exceeds the limit of {} steps",
                    ratio, MAX_STEPS
                ),
            });
        }
        let steps = steps as usize;

        let mut samples: Vec<f64> = (0..=steps).map(|i| i as f64 * h).collect();
        if let Some(last) = samples.last_mut() {
            *last = last.max(t_end);
        }

        Ok(Self { samples })
    }

    /// Grid from explicit, possibly non-uniform, sample times.
    ///
    /// # Errors
    /// `InvalidTimeGrid` if `samples` is empty, contains a non-finite value,
    /// or is not strictly increasing.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, IntegrationError> {
        if samples.is_empty() {
            return Err(IntegrationError::InvalidTimeGrid {
                message: "time grid must contain at least one sample".to_string(),
            });
        }
        for (i, &t) in samples.iter().enumerate() {
            if !t.is_finite() {
                return Err(IntegrationError::InvalidTimeGrid {
                    message: format!("sample {} is not finite", i),
                });
            }
        }
        for (i, pair) in samples.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(IntegrationError::InvalidTimeGrid {
                    message: format!(
                        "samples must be strictly increasing: t[{}] = {} >= t[{}] = {}",
                        i,
                        pair[0],
                        i + 1,
                        pair[1]
                    ),
                });
            }
        }
        Ok(Self { samples })
    }

    /// Number of samples (always at least one)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a grid holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample times in order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// First sample
    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    /// Last sample
    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Number of integration steps the grid implies (`len() - 1`)
    pub fn steps(&self) -> usize {
        self.samples.len() - 1
    }

    /// Consume the grid and return its samples
    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grid_length() {
        let grid = TimeGrid::uniform(3.5, 0.01).unwrap();
        assert_eq!(grid.len(), 351);
        assert_eq!(grid.start(), 0.0);
        assert!(grid.end() >= 3.5, "last sample {} < 3.5", grid.end());
        assert!((grid.end() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_uneven_ratio_rounds_up() {
        // 1.0 / 0.3 = 3.33.. -> 4 steps, last sample 1.2
        let grid = TimeGrid::uniform(1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 5);
        assert!(grid.end() >= 1.0);
        assert!((grid.end() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_horizon_single_sample() {
        let grid = TimeGrid::uniform(0.0, 0.1).unwrap();
        assert_eq!(grid.samples(), &[0.0]);
        assert_eq!(grid.steps(), 0);
    }

    #[test]
    fn test_uniform_is_strictly_increasing() {
        let grid = TimeGrid::uniform(10.0, 0.001).unwrap();
        assert!(grid.samples().windows(2).all(|p| p[1] > p[0]));
        assert!(grid.end() >= 10.0);
    }

    #[test]
    fn test_invalid_step_rejected() {
        for h in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = TimeGrid::uniform(1.0, h);
            assert!(
                matches!(result, Err(IntegrationError::InvalidTimeGrid { .. })),
                "h = {} should be rejected",
                h
            );
        }
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        for t_end in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(TimeGrid::uniform(t_end, 0.1).is_err(), "t_end = {}", t_end);
        }
    }

    #[test]
    fn test_unrepresentable_step_count_rejected() {
        // Ratio overflows to infinity
        assert!(matches!(
            TimeGrid::uniform(1e300, 1e-300),
            Err(IntegrationError::InvalidTimeGrid { .. })
        ));
        // Finite ratio far beyond any allocatable grid
        assert!(matches!(
            TimeGrid::uniform(1e20, 1.0),
            Err(IntegrationError::InvalidTimeGrid { .. })
        ));
    }

    #[test]
    fn test_large_grid_accepted() {
        let grid = TimeGrid::uniform(1000.0, 0.001).unwrap();
        assert_eq!(grid.len(), 1_000_001);
        assert_eq!(grid.start(), 0.0);
    }

    #[test]
    fn test_empty_samples_rejected() {
        let result = TimeGrid::from_samples(Vec::new());
        assert!(matches!(result, Err(IntegrationError::InvalidTimeGrid { .. })));
    }

    #[test]
    fn test_non_monotonic_samples_rejected() {
        assert!(TimeGrid::from_samples(vec![0.0, 0.5, 0.5]).is_err());
        assert!(TimeGrid::from_samples(vec![0.0, 1.0, 0.7]).is_err());
        assert!(TimeGrid::from_samples(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_non_uniform_samples_accepted() {
        let grid = TimeGrid::from_samples(vec![0.0, 0.1, 0.35, 1.0]).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.steps(), 3);
        assert_eq!(grid.end(), 1.0);
        assert_eq!(grid.into_inner(), vec![0.0, 0.1, 0.35, 1.0]);
    }
}
