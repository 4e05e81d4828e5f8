//! Ranking and output for scored candidates
//!
//! Orders scored candidates by priority (best first, stable on ties so equal
//! scores keep their catalog order), writes the ranked CSV catalog, and
//! prints the stdout summary projection.

use std::cmp::Ordering;
use std::path::Path;

use colored::*;
use tracing::info;

use crate::Result;
use crate::app::models::ScoredCandidate;
use crate::constants::columns;

#[cfg(test)]
pub mod tests;

/// Sort candidates by priority score, strictly descending.
///
/// The sort is stable: ties retain input (catalog) order, which keeps runs
/// reproducible.
pub fn rank_candidates(candidates: &mut [ScoredCandidate]) {
    // Scores are clamped and finite, so partial_cmp only falls through on
    // reconfigured weights producing NaN; treat that as a tie.
    candidates.sort_by(|a, b| {
        b.scores
            .priority
            .partial_cmp(&a.scores.priority)
            .unwrap_or(Ordering::Equal)
    });
}

/// Write the ranked catalog as CSV: every carried input column plus the
/// three derived scores, one row per surviving candidate
pub fn write_ranked_catalog(path: &Path, candidates: &[ScoredCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        crate::Error::output_write(path.display().to_string(), e.to_string())
    })?;

    writer
        .write_record(columns::OUTPUT)
        .map_err(|e| crate::Error::output_write(path.display().to_string(), e.to_string()))?;

    for scored in candidates {
        let c = &scored.candidate;
        let record = [
            c.toi_id.clone(),
            c.tic_id.clone(),
            c.tess_disposition.clone(),
            format_number(c.tess_magnitude),
            format_number(c.ra),
            format_number(c.dec),
            format_number(c.epoch_bjd),
            format_number(c.period_days),
            format_number(c.duration_hours),
            format_number(c.depth_ppm),
            format_number(c.teff_k),
            format_number(c.logg_cgs),
            format_number(c.rstar_rsun),
            format_number(c.mstar_msun),
            c.comments.clone().unwrap_or_default(),
            scored.scores.stellar_merit.to_string(),
            scored.scores.observability.to_string(),
            scored.scores.priority.to_string(),
        ];
        writer
            .write_record(&record)
            .map_err(|e| crate::Error::output_write(path.display().to_string(), e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| crate::Error::output_write(path.display().to_string(), e.to_string()))?;

    info!(
        "Wrote {} ranked candidates to {}",
        candidates.len(),
        path.display()
    );
    Ok(())
}

/// Print the stdout summary: one count line, then the fixed projection of
/// identifier, TIC, magnitude, period, priority, and comments
pub fn print_summary(candidates: &[ScoredCandidate]) {
    println!(
        "{}",
        format!("Filtered + ranked candidates: {}", candidates.len()).bright_green()
    );

    println!(
        "{:<10} {:<12} {:>6} {:>8} {:>9}  {}",
        "TOI", "TIC", "Tmag", "period", "priority", "comments"
    );

    for scored in candidates {
        let c = &scored.candidate;
        println!(
            "{:<10} {:<12} {:>6} {:>8} {:>9.4}  {}",
            c.toi_id,
            c.tic_id,
            format_number(c.tess_magnitude),
            format_number(c.period_days),
            scored.scores.priority,
            c.comment_text()
        );
    }
}

/// Render an optional number for output; missing stays an empty cell
fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
