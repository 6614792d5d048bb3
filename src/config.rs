//! Scenario configuration
//!
//! A scenario fixes everything a run needs: the gravitational constant, the
//! bodies (mass, initial position and velocity), the time horizon and the
//! step size. Scenarios are plain YAML:
//!
//! ```yaml
//! g: 1.0          # gravitational constant
//! t_end: 3.5      # total simulated time
//! h: 0.01         # fixed step size
//! bodies:
//!   - mass: 1.0
//!     position: [1.55, 0.3, 0.0]
//!     velocity: [0.4, 0.8, 0.0]
//!   - mass: 1.0
//!     position: [3.5, 0.3, 0.0]
//!     velocity: [0.0, 1.5, 0.0]
//!   - mass: 1.0
//!     position: [3.0, 0.3, 0.0]
//!     velocity: [0.0, 0.2, 0.0]
//! ```
//!
//! [`ScenarioConfig::build`] turns a configuration into a ready-to-integrate
//! [`Scenario`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::grid::TimeGrid;
use crate::gravity::NewtonianGravity;
use crate::solver::IntegrationError;
use crate::state::DIM;

/// Initial state and mass of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    /// Mass of the body
    pub mass: f64,
    /// Initial position
    pub position: [f64; DIM],
    /// Initial velocity
    pub velocity: [f64; DIM],
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Gravitational constant
    #[serde(alias = "G")]
    pub g: f64,
    /// Simulated time horizon, starting at t = 0
    pub t_end: f64,
    /// Fixed step size
    pub h: f64,
    /// Bodies in state-vector order
    pub bodies: Vec<BodyConfig>,
}

/// A scenario ready to hand to [`Rk4::integrate`](crate::Rk4::integrate)
#[derive(Debug, Clone)]
pub struct Scenario<const N: usize> {
    /// Force model with the configured `G` and masses
    pub model: NewtonianGravity,
    /// Packed initial state
    pub initial_state: [f64; N],
    /// Sample times
    pub grid: TimeGrid,
}

/// Errors raised while loading or building a scenario
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Scenario file could not be opened
    #[error("cannot read scenario {path}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Scenario is not valid YAML for [`ScenarioConfig`]
    #[error("malformed scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Scenario parsed but describes an impossible run
    #[error("invalid scenario: {0}")]
    Invalid(#[from] IntegrationError),
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScenarioConfig {
    /// Three unit masses with G = 1 integrated for 3.5 time units at h = 0.01.
    ///
    /// Bodies 1 and 3 close in on each other late in the run, which makes
    /// this a good stress case for the unsoftened force law.
    pub fn reference() -> Self {
        let body = |position, velocity| BodyConfig {
            mass: 1.0,
            position,
            velocity,
        };
        Self {
            g: 1.0,
            t_end: 3.5,
            h: 0.01,
            bodies: vec![
                body([1.55, 0.3, 0.0], [0.4, 0.8, 0.0]),
                body([3.5, 0.3, 0.0], [0.0, 1.5, 0.0]),
                body([3.0, 0.3, 0.0], [0.0, 0.2, 0.0]),
            ],
        }
    }

    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a scenario from a YAML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_reader(BufReader::new(file))?;
        log::debug!("loaded scenario from {}", path.display());
        Ok(config)
    }

    /// Build the force model, initial state and time grid.
    ///
    /// # Errors
    /// `ConfigError::Invalid` if `N` is not six times the body count, or the
    /// constants, masses or grid parameters are rejected.
    pub fn build<const N: usize>(&self) -> Result<Scenario<N>, ConfigError> {
        let masses = self.bodies.iter().map(|b| b.mass).collect();
        let model = NewtonianGravity::new(self.g, masses)?;

        let positions: Vec<_> = self.bodies.iter().map(|b| b.position).collect();
        let velocities: Vec<_> = self.bodies.iter().map(|b| b.velocity).collect();
        let initial_state = model.layout().pack(&positions, &velocities)?;

        let grid = TimeGrid::uniform(self.t_end, self.h)?;

        Ok(Scenario {
            model,
            initial_state,
            grid,
        })
    }
}
