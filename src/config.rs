//! Configuration management and validation.
//!
//! Provides configuration structures for the ranking pipeline: the priority
//! weight pair and the inert observing-site block carried for CLI
//! compatibility.

use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Weights combining the two component scores into the priority score.
///
/// Historical revisions of the ranking used 0.45/0.55 before settling on an
/// even split; both live here as named profiles rather than as duplicated
/// scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight applied to the stellar-merit score
    pub stellar_merit: f64,
    /// Weight applied to the observability score
    pub observability: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self::standard()
    }
}

impl PriorityWeights {
    /// Canonical even weighting
    pub fn standard() -> Self {
        Self {
            stellar_merit: 0.5,
            observability: 0.5,
        }
    }

    /// Earlier observability-leaning weighting, kept for reproducing old runs
    pub fn legacy() -> Self {
        Self {
            stellar_merit: 0.45,
            observability: 0.55,
        }
    }

    /// Validate that the pair is a convex combination
    pub fn validate(&self) -> Result<()> {
        if self.stellar_merit < 0.0 || self.observability < 0.0 {
            return Err(Error::configuration(format!(
                "priority weights must be non-negative, got {}/{}",
                self.stellar_merit, self.observability
            )));
        }
        let sum = self.stellar_merit + self.observability;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::configuration(format!(
                "priority weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Observing site and dark-time window parameters.
///
/// Accepted on the command line for compatibility with earlier revisions of
/// the tool, which planned (but never wired in) a visibility check. Nothing
/// in the filtering or scoring pipeline reads these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservingSite {
    /// UTC window start (YYYY-MM-DD), unused
    pub window_start: Option<String>,
    /// UTC window end (YYYY-MM-DD), unused
    pub window_end: Option<String>,
    /// Observer latitude (deg)
    pub latitude_deg: f64,
    /// Observer longitude (deg, East positive)
    pub longitude_deg: f64,
    /// Site elevation (m)
    pub elevation_m: f64,
    /// Minimum target altitude (deg)
    pub min_altitude_deg: f64,
    /// Sun altitude threshold for darkness (deg)
    pub sun_altitude_limit_deg: f64,
    /// Minimum dark fraction of the observing block
    pub dark_fraction: f64,
    /// Sampling cadence within the block (minutes)
    pub cadence_minutes: f64,
    /// Require 100% astronomical night
    pub strict: bool,
}

impl Default for ObservingSite {
    fn default() -> Self {
        // San Pedro Mártir defaults from the original observing setup
        Self {
            window_start: None,
            window_end: None,
            latitude_deg: 31.043416667,
            longitude_deg: -115.454763889,
            elevation_m: 2780.0,
            min_altitude_deg: 30.0,
            sun_altitude_limit_deg: -18.0,
            dark_fraction: 0.8,
            cadence_minutes: 5.0,
            strict: false,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Priority weight pair
    pub weights: PriorityWeights,
    /// Path for the ranked output catalog
    pub output_path: PathBuf,
    /// Inert observing-site block, carried but never consumed
    pub observing_site: ObservingSite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: PriorityWeights::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            observing_site: ObservingSite::default(),
        }
    }
}

impl Config {
    /// Validate the configuration before running the pipeline
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("output path must not be empty"));
        }
        debug!(
            "Configuration validated: weights {}/{}, output {}",
            self.weights.stellar_merit,
            self.weights.observability,
            self.output_path.display()
        );
        Ok(())
    }
}
