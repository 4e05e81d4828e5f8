//! Scoring engine for surviving TOI candidates
//!
//! Computes two component scores per candidate and combines them into the
//! priority score used for ranking:
//!
//! - **Stellar merit** rewards cooler, smaller host stars, where a small
//!   planet produces a deeper transit.
//! - **Observability** rewards brighter targets, deeper transits, shorter
//!   periods, and durations near the two-hour sweet spot.
//!
//! Every component is a pure function of one candidate's fields. Missing
//! values flow to a component score of exactly 0 via [`clamp01`]; nothing
//! here ever raises for valid numeric input.

use tracing::info;

use crate::app::models::{Candidate, CandidateScores, ScoredCandidate};
use crate::config::PriorityWeights;
use crate::constants::{gates, scoring};

#[cfg(test)]
pub mod tests;

/// Clamp a possibly-missing value into [0, 1]; missing clamps to 0.
///
/// Idempotent: clamping an already-clamped value is a no-op.
pub fn clamp01(value: Option<f64>) -> f64 {
    match value {
        Some(v) => v.clamp(0.0, 1.0),
        None => 0.0,
    }
}

/// Triangular duration membership: zero at and beyond the support bounds,
/// rising linearly to 1 at the peak, falling linearly back to zero.
/// Continuous at the peak; missing duration scores 0.
pub fn duration_triangular(hours: Option<f64>) -> f64 {
    let Some(h) = hours else {
        return 0.0;
    };
    if h <= gates::DURATION_MIN_HOURS || h >= gates::DURATION_MAX_HOURS {
        return 0.0;
    }
    if h <= scoring::DURATION_PEAK_HOURS {
        (h - gates::DURATION_MIN_HOURS)
            / safe_span(scoring::DURATION_PEAK_HOURS - gates::DURATION_MIN_HOURS)
    } else {
        1.0 - (h - scoring::DURATION_PEAK_HOURS)
            / safe_span(gates::DURATION_MAX_HOURS - scoring::DURATION_PEAK_HOURS)
    }
}

/// Stellar-merit score: weighted, clamped ramps over temperature and radius.
///
/// The reference low bounds are narrower than the hard gates, so the
/// pre-clamp ramps can exceed 1 for the coolest and smallest stars; clamping
/// saturates them at 1.
pub fn stellar_merit_score(candidate: &Candidate) -> f64 {
    let teff_ramp = candidate
        .teff_k
        .map(|teff| (gates::TEFF_MAX_K - teff) / safe_span(gates::TEFF_MAX_K - scoring::TEFF_REF_LOW_K));
    let radius_ramp = candidate.rstar_rsun.map(|rstar| {
        (gates::RSTAR_MAX_RSUN - rstar)
            / safe_span(gates::RSTAR_MAX_RSUN - scoring::RSTAR_REF_LOW_RSUN)
    });

    scoring::MERIT_TEFF_WEIGHT * clamp01(teff_ramp)
        + scoring::MERIT_RADIUS_WEIGHT * clamp01(radius_ramp)
}

/// Observability score: weighted, clamped ramps over brightness, depth, and
/// period, plus the triangular duration membership.
pub fn observability_score(candidate: &Candidate) -> f64 {
    let brightness = candidate.tess_magnitude.map(|mag| {
        1.0 - (mag - scoring::MAG_BRIGHT_REF)
            / safe_span(scoring::MAG_FAINT_REF - scoring::MAG_BRIGHT_REF)
    });
    let depth = candidate.depth_ppm.map(|depth| {
        (depth - scoring::DEPTH_REF_LOW_PPM)
            / safe_span(scoring::DEPTH_REF_HIGH_PPM - scoring::DEPTH_REF_LOW_PPM)
    });
    let period = candidate.period_days.map(|period| {
        1.0 - (period - scoring::PERIOD_REF_SHORT_DAYS)
            / safe_span(scoring::PERIOD_REF_LONG_DAYS - scoring::PERIOD_REF_SHORT_DAYS)
    });

    scoring::OBS_BRIGHTNESS_WEIGHT * clamp01(brightness)
        + scoring::OBS_DEPTH_WEIGHT * clamp01(depth)
        + scoring::OBS_PERIOD_WEIGHT * clamp01(period)
        + scoring::OBS_DURATION_WEIGHT * duration_triangular(candidate.duration_hours)
}

/// Score every candidate, preserving input order
pub fn score_candidates(
    candidates: Vec<Candidate>,
    weights: &PriorityWeights,
) -> Vec<ScoredCandidate> {
    let scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let scores = score_candidate(&candidate, weights);
            ScoredCandidate { candidate, scores }
        })
        .collect();

    info!("Scored {} candidates", scored.len());
    scored
}

/// Compute the score triple for one candidate
pub fn score_candidate(candidate: &Candidate, weights: &PriorityWeights) -> CandidateScores {
    let stellar_merit = stellar_merit_score(candidate);
    let observability = observability_score(candidate);
    CandidateScores {
        stellar_merit,
        observability,
        priority: weights.stellar_merit * stellar_merit + weights.observability * observability,
    }
}

/// Floor a normalization span away from zero so reconfigured reference
/// constants can never divide by zero
fn safe_span(span: f64) -> f64 {
    if span.abs() < scoring::MIN_DENOMINATOR {
        scoring::MIN_DENOMINATOR.copysign(span)
    } else {
        span
    }
}
