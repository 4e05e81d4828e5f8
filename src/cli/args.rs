//! Command-line argument definitions for the TOI ranker
//!
//! Defines the CLI interface using the clap derive API. Besides the catalog
//! path and output/weight options, the interface preserves the historical
//! observing-window and site flags: they are accepted and validated for
//! compatibility with earlier revisions of the tool but are never consumed
//! by the filtering or scoring pipeline.

use crate::config::{Config, ObservingSite, PriorityWeights};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the TOI M-dwarf candidate ranker
///
/// Filters a TESS Objects of Interest catalog down to promising M-dwarf
/// planet candidates, scores them on stellar merit and observability, and
/// writes a ranked CSV catalog.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "toi-ranker",
    version,
    about = "Filter and rank TESS Objects of Interest for M-dwarf follow-up observation",
    long_about = "Reads an ExoFOP-style TOI CSV catalog, keeps the planet candidates around \
                  cool dwarf hosts that clear the observability gates, scores each survivor \
                  on stellar merit and observability, and writes the ranked catalog plus a \
                  stdout summary."
)]
pub struct Args {
    /// Path to the TOI CSV catalog (ExoFOP-style export)
    #[arg(value_name = "TOI_CSV")]
    pub catalog: PathBuf,

    /// Output path for the ranked catalog
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the ranked catalog [default: m_dwarf_candidates_ranked.csv]"
    )]
    pub output: Option<PathBuf>,

    /// Priority weight profile combining the two component scores
    #[arg(
        long = "weight-profile",
        value_enum,
        default_value_t = WeightProfile::Standard,
        help = "Priority weight profile (standard = 0.5/0.5, legacy = 0.45/0.55)"
    )]
    pub weight_profile: WeightProfile,

    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress non-essential logging
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(flatten)]
    pub window: ObservingWindowArgs,
}

/// Observing-window and site parameters.
///
/// Accepted for interface compatibility with earlier revisions that planned
/// a visibility check; nothing in the pipeline reads them.
#[derive(Debug, Clone, clap::Args)]
pub struct ObservingWindowArgs {
    /// UTC start date (YYYY-MM-DD); accepted, not used
    #[arg(long = "start", value_name = "DATE", help_heading = "Observing window (inert)")]
    pub start: Option<String>,

    /// UTC end date (YYYY-MM-DD); accepted, not used
    #[arg(long = "end", value_name = "DATE", help_heading = "Observing window (inert)")]
    pub end: Option<String>,

    /// Observer latitude (deg); accepted, not used
    #[arg(
        long = "site-lat",
        value_name = "DEG",
        default_value_t = 31.043416667,
        help_heading = "Observing window (inert)"
    )]
    pub site_lat: f64,

    /// Observer longitude (deg, East positive); accepted, not used
    #[arg(
        long = "site-lon",
        value_name = "DEG",
        default_value_t = -115.454763889,
        help_heading = "Observing window (inert)"
    )]
    pub site_lon: f64,

    /// Site elevation (meters); accepted, not used
    #[arg(
        long = "elevation-m",
        value_name = "M",
        default_value_t = 2780.0,
        help_heading = "Observing window (inert)"
    )]
    pub elevation_m: f64,

    /// Minimum altitude (deg) required through the block; accepted, not used
    #[arg(
        long = "min-alt-deg",
        value_name = "DEG",
        default_value_t = 30.0,
        help_heading = "Observing window (inert)"
    )]
    pub min_alt_deg: f64,

    /// Sun altitude threshold (deg) for darkness; accepted, not used
    #[arg(
        long = "sun-limit",
        value_name = "DEG",
        default_value_t = -18.0,
        help_heading = "Observing window (inert)"
    )]
    pub sun_limit: f64,

    /// Minimum dark fraction of the block; accepted, not used
    #[arg(
        long = "dark-frac",
        value_name = "FRAC",
        default_value_t = 0.8,
        help_heading = "Observing window (inert)"
    )]
    pub dark_frac: f64,

    /// Sampling cadence (minutes) within the block; accepted, not used
    #[arg(
        long = "cadence-min",
        value_name = "MIN",
        default_value_t = 5.0,
        help_heading = "Observing window (inert)"
    )]
    pub cadence_min: f64,

    /// Require 100% astronomical night; accepted, not used
    #[arg(long = "strict", help_heading = "Observing window (inert)")]
    pub strict: bool,
}

/// Named priority weight profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightProfile {
    /// Even split between stellar merit and observability (canonical)
    Standard,
    /// Observability-leaning 0.45/0.55 split from earlier revisions
    Legacy,
}

impl WeightProfile {
    /// Resolve the profile to its weight pair
    pub fn weights(self) -> PriorityWeights {
        match self {
            WeightProfile::Standard => PriorityWeights::standard(),
            WeightProfile::Legacy => PriorityWeights::legacy(),
        }
    }
}

impl Args {
    /// Effective logging level, accounting for quiet mode
    pub fn effective_log_level(&self) -> &str {
        if self.quiet { "warn" } else { &self.log_level }
    }

    /// Build the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config {
            weights: self.weight_profile.weights(),
            ..Config::default()
        };
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        config.observing_site = ObservingSite {
            window_start: self.window.start.clone(),
            window_end: self.window.end.clone(),
            latitude_deg: self.window.site_lat,
            longitude_deg: self.window.site_lon,
            elevation_m: self.window.elevation_m,
            min_altitude_deg: self.window.min_alt_deg,
            sun_altitude_limit_deg: self.window.sun_limit,
            dark_fraction: self.window.dark_frac,
            cadence_minutes: self.window.cadence_min,
            strict: self.window.strict,
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation_parses() {
        let args = Args::try_parse_from(["toi-ranker", "tois.csv"]).unwrap();
        assert_eq!(args.catalog, PathBuf::from("tois.csv"));
        assert_eq!(args.weight_profile, WeightProfile::Standard);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_weight_profile_resolves() {
        let args =
            Args::try_parse_from(["toi-ranker", "tois.csv", "--weight-profile", "legacy"])
                .unwrap();
        assert_eq!(args.to_config().weights, PriorityWeights::legacy());
    }

    #[test]
    fn test_inert_window_flags_accepted() {
        let args = Args::try_parse_from([
            "toi-ranker",
            "tois.csv",
            "--start",
            "2025-11-17",
            "--end",
            "2025-11-30",
            "--site-lat",
            "28.75",
            "--strict",
        ])
        .unwrap();

        let config = args.to_config();
        assert_eq!(config.observing_site.window_start.as_deref(), Some("2025-11-17"));
        assert_eq!(config.observing_site.latitude_deg, 28.75);
        assert!(config.observing_site.strict);
        // The inert block never influences the weights or output path
        assert_eq!(config.weights, PriorityWeights::standard());
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        assert!(Args::try_parse_from(["toi-ranker"]).is_err());
    }

    #[test]
    fn test_quiet_overrides_log_level() {
        let args =
            Args::try_parse_from(["toi-ranker", "tois.csv", "--log-level", "debug", "--quiet"])
                .unwrap();
        assert_eq!(args.effective_log_level(), "warn");
    }
}
