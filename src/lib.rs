//! TOI Ranker Library
//!
//! A Rust library for filtering and ranking TESS Objects of Interest (TOIs)
//! to surface the most promising M-dwarf transit candidates for follow-up
//! observation.
//!
//! This library provides tools for:
//! - Loading ExoFOP-style TOI CSV catalogs with header normalization
//! - Coercing photometric and stellar parameters with explicit missing-value handling
//! - Applying the M-dwarf eligibility gates, including vetting-comment flag detection
//! - Scoring surviving candidates on stellar merit and observability
//! - Ranking candidates by priority and writing the result catalog

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_loader;
        pub mod eligibility;
        pub mod ranking;
        pub mod scoring;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Candidate, CandidateScores, ScoredCandidate};
pub use config::{Config, PriorityWeights};

/// Result type alias for the TOI ranker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for TOI catalog processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required catalog columns are absent from the input header
    #[error("input catalog missing required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output catalog could not be written
    #[error("Failed to write output catalog '{path}': {message}")]
    OutputWrite { path: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-columns schema error
    pub fn missing_columns(columns: Vec<String>) -> Self {
        Self::MissingColumns { columns }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
