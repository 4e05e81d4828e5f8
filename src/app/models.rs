//! Core data models for TOI catalog processing
//!
//! Defines the candidate row as read from the catalog and the scored
//! candidate produced by the scoring engine. Numeric fields are optional so
//! missing-value propagation through the filter and scorer stays explicit
//! rather than incidental.

use serde::{Deserialize, Serialize};

/// One TOI catalog row with canonical field names.
///
/// The loader guarantees identifiers, disposition, coordinates, and the core
/// transit/stellar parameters are present for every candidate it emits;
/// `depth_ppm`, `mstar_msun`, and `comments` may legitimately be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// TOI identifier, e.g. "1234.01"
    pub toi_id: String,

    /// TESS Input Catalog identifier
    pub tic_id: String,

    /// Vetting disposition, e.g. "PC", "FP", "KP"
    pub tess_disposition: String,

    /// Apparent TESS magnitude (lower is brighter)
    pub tess_magnitude: Option<f64>,

    /// Right ascension (deg), carried through but not gated or scored
    pub ra: Option<f64>,

    /// Declination (deg), carried through but not gated or scored
    pub dec: Option<f64>,

    /// Transit epoch (BJD)
    pub epoch_bjd: Option<f64>,

    /// Orbital period (days)
    pub period_days: Option<f64>,

    /// Transit duration (hours)
    pub duration_hours: Option<f64>,

    /// Transit depth (ppm)
    pub depth_ppm: Option<f64>,

    /// Stellar effective temperature (K)
    pub teff_k: Option<f64>,

    /// Stellar surface gravity (cgs)
    pub logg_cgs: Option<f64>,

    /// Stellar radius (solar radii)
    pub rstar_rsun: Option<f64>,

    /// Stellar mass (solar masses), carried through unused
    pub mstar_msun: Option<f64>,

    /// Free-text vetting comments
    pub comments: Option<String>,
}

impl Candidate {
    /// Comment text for flag matching, empty when absent
    pub fn comment_text(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// Derived scores for a candidate that passed the eligibility filter.
///
/// Both component scores lie in [0, 1]; the priority score is a convex
/// combination of the two and is deterministic given the row's fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScores {
    /// How favorable the host star is for small-planet detection
    pub stellar_merit: f64,

    /// How favorable brightness, depth, period, and duration are for follow-up
    pub observability: f64,

    /// Weighted combination used for ranking
    pub priority: f64,
}

/// A surviving candidate together with its derived scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub scores: CandidateScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate() -> Candidate {
        Candidate {
            toi_id: "1000.01".to_string(),
            tic_id: "261136679".to_string(),
            tess_disposition: "PC".to_string(),
            tess_magnitude: Some(12.9),
            ra: Some(123.45),
            dec: Some(-45.6),
            epoch_bjd: Some(2459000.5),
            period_days: Some(4.2),
            duration_hours: Some(2.1),
            depth_ppm: Some(3200.0),
            teff_k: Some(3300.0),
            logg_cgs: Some(4.8),
            rstar_rsun: Some(0.35),
            mstar_msun: Some(0.33),
            comments: None,
        }
    }

    #[test]
    fn test_comment_text_defaults_to_empty() {
        let candidate = sample_candidate();
        assert_eq!(candidate.comment_text(), "");

        let with_comment = Candidate {
            comments: Some("nice target".to_string()),
            ..candidate
        };
        assert_eq!(with_comment.comment_text(), "nice target");
    }
}
