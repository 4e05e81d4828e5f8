//! Eligibility filtering for TOI candidates
//!
//! Keeps exactly the candidates satisfying every hard gate: an M-dwarf host
//! (temperature, gravity, radius), an observable signal (magnitude, depth,
//! period, duration), a planet-candidate disposition, and a vetting comment
//! free of disqualifying flags.
//!
//! A missing value in any gating field fails that gate, so the row is
//! dropped. This is deliberate missing-value propagation, not an accident of
//! comparison semantics.

pub mod comment_flags;

use tracing::{debug, info};

use crate::app::models::Candidate;
use crate::constants::gates;
use comment_flags::is_disqualified;

#[cfg(test)]
pub mod tests;

/// Keep the candidates that satisfy every eligibility gate, preserving
/// input order
pub fn filter_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let total = candidates.len();
    let mut surviving = Vec::new();

    for candidate in candidates {
        if passes_gates(&candidate) {
            surviving.push(candidate);
        } else {
            debug!("TOI {} rejected by eligibility gates", candidate.toi_id);
        }
    }

    info!(
        "Eligibility filtering complete: {} -> {} candidates ({} rejected)",
        total,
        surviving.len(),
        total - surviving.len()
    );

    surviving
}

/// Evaluate the full gate conjunction for one candidate
pub fn passes_gates(candidate: &Candidate) -> bool {
    gates::ACCEPTED_DISPOSITIONS.contains(&candidate.tess_disposition.as_str())
        && in_range(candidate.teff_k, gates::TEFF_MIN_K, gates::TEFF_MAX_K)
        && at_least(candidate.logg_cgs, gates::LOGG_MIN_CGS)
        && at_most(candidate.rstar_rsun, gates::RSTAR_MAX_RSUN)
        && at_most(candidate.tess_magnitude, gates::TESS_MAG_MAX)
        && at_least(candidate.depth_ppm, gates::DEPTH_PPM_MIN)
        && at_most(candidate.period_days, gates::PERIOD_MAX_DAYS)
        && in_range(
            candidate.duration_hours,
            gates::DURATION_MIN_HOURS,
            gates::DURATION_MAX_HOURS,
        )
        && !is_disqualified(candidate.comment_text())
}

/// Inclusive range gate; missing fails
fn in_range(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_some_and(|v| v >= min && v <= max)
}

/// Lower-bound gate (inclusive); missing fails
fn at_least(value: Option<f64>, min: f64) -> bool {
    value.is_some_and(|v| v >= min)
}

/// Upper-bound gate (inclusive); missing fails
fn at_most(value: Option<f64>, max: f64) -> bool {
    value.is_some_and(|v| v <= max)
}
