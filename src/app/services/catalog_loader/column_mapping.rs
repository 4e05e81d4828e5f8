//! Header normalization for TOI catalog exports
//!
//! ExoFOP TOI exports carry verbose human-readable headers ("Stellar Eff
//! Temp (K)", "Period (days)", ...). This module renames that vocabulary to
//! the canonical short names used throughout the pipeline, and validates that
//! every required column is present before any row is processed.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Fixed rename table from verbatim ExoFOP export headers to canonical names.
///
/// Headers already in canonical form pass through unchanged, so a previously
/// normalized catalog is accepted as-is.
pub const EXOFOP_RENAMES: &[(&str, &str)] = &[
    ("TOI", columns::TOI_ID),
    ("TIC ID", columns::TIC_ID),
    ("TESS Disposition", columns::TESS_DISPOSITION),
    ("TESS Mag", columns::TESS_MAGNITUDE),
    ("RA", columns::RA),
    ("Dec", columns::DEC),
    ("Epoch (BJD)", columns::EPOCH_BJD),
    ("Period (days)", columns::PERIOD_DAYS),
    ("Duration (hours)", columns::DURATION_HOURS),
    ("Depth (ppm)", columns::DEPTH_PPM),
    ("Stellar Eff Temp (K)", columns::TEFF_K),
    ("Stellar log(g) (cm/s^2)", columns::LOGG_CGS),
    ("Stellar Radius (R_Sun)", columns::RSTAR_RSUN),
    ("Stellar Mass (M_Sun)", columns::MSTAR_MSUN),
    ("Comments", columns::COMMENTS),
];

/// Map one header to its canonical name
pub fn canonical_name(header: &str) -> &str {
    let trimmed = header.trim();
    EXOFOP_RENAMES
        .iter()
        .find(|(source, _)| *source == trimmed)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(trimmed)
}

/// Canonical column name to record index mapping for one catalog file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze a header record, renaming source headers to canonical names.
    ///
    /// Fails with [`Error::MissingColumns`] naming every absent required
    /// column; this is fatal and happens before any row processing.
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let canonical = canonical_name(header).to_string();
            // First occurrence wins if an export carries duplicate headers
            name_to_index.entry(canonical).or_insert(index);
        }

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|name| !name_to_index.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        Ok(Self { name_to_index })
    }

    /// Get the record index for a canonical column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Number of recognized columns
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
