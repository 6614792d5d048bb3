//! # threebody: Fixed-step RK4 for the Newtonian N-body problem
//!
//! Integrates the gravitational equations of motion for a small, fixed
//! number of point masses over a finite horizon, producing a dense
//! trajectory table (one state per time sample) for downstream plotting.
//!
//! ## Features
//!
//! - Classical 4-stage Runge-Kutta, one step per time-grid interval
//! - Uniform or non-uniform time grids
//! - Direct-summation inverse-square gravity with no softening
//! - Bit-for-bit deterministic: identical inputs give identical trajectories
//! - Energy, momentum and center-of-mass diagnostics
//! - YAML scenario files
//!
//! ## Basic Usage
//!
//! ```rust
//! use threebody::{NewtonianGravity, Rk4, TimeGrid};
//!
//! // Three unit masses, G = 1
//! let model = NewtonianGravity::new(1.0, vec![1.0, 1.0, 1.0]).unwrap();
//!
//! let y0: [f64; 18] = model
//!     .layout()
//!     .pack(
//!         &[[1.55, 0.3, 0.0], [3.5, 0.3, 0.0], [3.0, 0.3, 0.0]],
//!         &[[0.4, 0.8, 0.0], [0.0, 1.5, 0.0], [0.0, 0.2, 0.0]],
//!     )
//!     .unwrap();
//!
//! let grid = TimeGrid::uniform(3.5, 0.01).unwrap();
//! let trajectory = Rk4::new().integrate(&model, &y0, &grid).unwrap();
//!
//! assert_eq!(trajectory.len(), 351);
//! assert_eq!(trajectory.initial_state(), &y0);
//!
//! // Trail of body 0 for a plot
//! let trail: Vec<[f64; 3]> = trajectory.positions(model.layout(), 0).collect();
//! assert_eq!(trail.len(), 351);
//! ```
//!
//! ## State Layout
//!
//! The state of `B` bodies is a flat `[f64; 6B]`: the `B` positions come
//! first, then the `B` velocities, each as three consecutive components.
//! [`StateLayout`] owns the offsets; both the force model and
//! [`StateLayout::pack`] go through it.
//!
//! ## Singularities
//!
//! The force law divides by the cube of each pairwise distance and does not
//! regularize it. If two bodies coincide, the derivative becomes NaN or
//! infinite, and the remaining rows of the trajectory carry those values.
//! Use [`Trajectory::first_non_finite`] to find where that happened.
//!
//! ## References
//!
//! 1. Hairer, E., Nørsett, S.P., & Wanner, G. (1993). "Solving
//!    Ordinary Differential Equations I: Nonstiff Problems".
//!    Springer.
//!
//! 2. Aarseth, S.J. (2003). "Gravitational N-Body Simulations".
//!    Cambridge University Press.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod coefficients;
pub mod config;
pub mod diagnostics;
pub mod gravity;
pub mod grid;
pub mod solver;
pub mod state;
pub mod trajectory;

pub use config::{BodyConfig, ConfigError, Scenario, ScenarioConfig};
pub use gravity::NewtonianGravity;
pub use grid::TimeGrid;
pub use solver::{IntegrationError, OdeSystem, Rk4, Stats};
pub use state::{StateLayout, DIM};
pub use trajectory::Trajectory;
