//! Catalog loader for TOI CSV exports
//!
//! Reads a delimited TOI catalog into memory, renames the ExoFOP header
//! vocabulary to canonical names, coerces measurement columns to real
//! numbers, and drops rows that cannot be meaningfully evaluated because a
//! required field is missing.
//!
//! Missing-value policy:
//! - A required column absent from the header is fatal ([`crate::Error::MissingColumns`]).
//! - A required field missing in one row drops that row, never the run.
//! - An unparseable numeric cell coerces to missing, never raises.

pub mod column_mapping;
pub mod field_parsers;

use std::path::Path;
use tracing::{debug, info};

use crate::Result;
use crate::app::models::Candidate;
use crate::constants::columns;
use column_mapping::ColumnMapping;
use field_parsers::{parse_optional_f64, parse_optional_string};

#[cfg(test)]
pub mod tests;

/// Loading result with candidates and basic statistics
#[derive(Debug, Clone)]
pub struct CatalogLoadResult {
    /// Candidates with all load-required fields present, in input order
    pub candidates: Vec<Candidate>,

    /// Basic loading statistics
    pub stats: CatalogLoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CatalogLoadStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of candidates loaded
    pub candidates_loaded: usize,

    /// Number of rows dropped for missing required fields
    pub dropped_missing_required: usize,
}

/// Load a TOI catalog from a CSV file.
///
/// Row order is preserved; it becomes the tie-break order for equal
/// priority scores downstream.
pub fn load_catalog(path: &Path) -> Result<CatalogLoadResult> {
    info!("Loading TOI catalog: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            crate::Error::csv_parsing(
                path.display().to_string(),
                "failed to open catalog",
                Some(e),
            )
        })?;

    let headers = reader
        .headers()
        .map_err(|e| {
            crate::Error::csv_parsing(
                path.display().to_string(),
                "failed to read catalog header",
                Some(e),
            )
        })?
        .clone();

    let mapping = ColumnMapping::analyze(&headers)?;
    debug!("Recognized {} catalog columns", mapping.column_count());

    let mut stats = CatalogLoadStats::default();
    let mut candidates = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| {
            crate::Error::csv_parsing(path.display().to_string(), "malformed record", Some(e))
        })?;
        stats.total_records += 1;

        match parse_candidate(&record, &mapping) {
            Some(candidate) => candidates.push(candidate),
            None => {
                stats.dropped_missing_required += 1;
                debug!(
                    "Dropped record {}: missing required field(s)",
                    stats.total_records
                );
            }
        }
    }

    stats.candidates_loaded = candidates.len();
    info!(
        "Loaded {} candidates from {} records ({} dropped for missing required fields)",
        stats.candidates_loaded, stats.total_records, stats.dropped_missing_required
    );

    Ok(CatalogLoadResult { candidates, stats })
}

/// Parse one record into a candidate, `None` when any load-required field
/// is missing.
///
/// Depth, stellar mass, and comments are not load-required: a missing depth
/// fails the eligibility gate per-row instead, and the other two are carried
/// through unused.
fn parse_candidate(record: &csv::StringRecord, mapping: &ColumnMapping) -> Option<Candidate> {
    let toi_id = parse_optional_string(record, mapping, columns::TOI_ID)?;
    let tic_id = parse_optional_string(record, mapping, columns::TIC_ID)?;
    let tess_disposition = parse_optional_string(record, mapping, columns::TESS_DISPOSITION)?;

    let tess_magnitude = parse_optional_f64(record, mapping, columns::TESS_MAGNITUDE);
    let ra = parse_optional_f64(record, mapping, columns::RA);
    let dec = parse_optional_f64(record, mapping, columns::DEC);
    let epoch_bjd = parse_optional_f64(record, mapping, columns::EPOCH_BJD);
    let period_days = parse_optional_f64(record, mapping, columns::PERIOD_DAYS);
    let duration_hours = parse_optional_f64(record, mapping, columns::DURATION_HOURS);
    let teff_k = parse_optional_f64(record, mapping, columns::TEFF_K);
    let logg_cgs = parse_optional_f64(record, mapping, columns::LOGG_CGS);
    let rstar_rsun = parse_optional_f64(record, mapping, columns::RSTAR_RSUN);

    // Load-required numeric fields
    for field in [
        tess_magnitude,
        ra,
        dec,
        epoch_bjd,
        period_days,
        duration_hours,
        teff_k,
        logg_cgs,
        rstar_rsun,
    ] {
        field?;
    }

    Some(Candidate {
        toi_id,
        tic_id,
        tess_disposition,
        tess_magnitude,
        ra,
        dec,
        epoch_bjd,
        period_days,
        duration_hours,
        depth_ppm: parse_optional_f64(record, mapping, columns::DEPTH_PPM),
        teff_k,
        logg_cgs,
        rstar_rsun,
        mstar_msun: parse_optional_f64(record, mapping, columns::MSTAR_MSUN),
        comments: parse_optional_string(record, mapping, columns::COMMENTS),
    })
}
