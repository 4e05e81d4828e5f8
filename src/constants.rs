//! Application constants for the TOI ranker
//!
//! This module contains the eligibility gate thresholds, scoring reference
//! values, column vocabulary, and disqualifying-comment vocabulary used
//! throughout the ranking pipeline.

// =============================================================================
// Eligibility Gate Thresholds
// =============================================================================

/// Hard gates a candidate must satisfy to remain in the ranked catalog.
///
/// Range gates are inclusive on both ends. A missing value in any gating
/// field fails its gate.
pub mod gates {
    /// Stellar effective temperature window for M dwarfs (K)
    pub const TEFF_MIN_K: f64 = 2400.0;
    pub const TEFF_MAX_K: f64 = 4000.0;

    /// Minimum surface gravity, rejects evolved stars (cgs)
    pub const LOGG_MIN_CGS: f64 = 4.3;

    /// Maximum stellar radius (solar radii)
    pub const RSTAR_MAX_RSUN: f64 = 0.7;

    /// Faint limit in TESS magnitude
    pub const TESS_MAG_MAX: f64 = 14.0;

    /// Minimum transit depth (ppm)
    pub const DEPTH_PPM_MIN: f64 = 2000.0;

    /// Maximum orbital period (days)
    pub const PERIOD_MAX_DAYS: f64 = 15.0;

    /// Transit duration window (hours)
    pub const DURATION_MIN_HOURS: f64 = 0.5;
    pub const DURATION_MAX_HOURS: f64 = 5.0;

    /// Dispositions accepted by the filter
    pub const ACCEPTED_DISPOSITIONS: &[&str] = &["PC"];
}

// =============================================================================
// Scoring Reference Values
// =============================================================================

/// Normalization references and component weights for the scoring engine.
///
/// The reference low bounds (`TEFF_REF_LOW_K`, `RSTAR_REF_LOW_RSUN`) are
/// intentionally narrower than the hard gates: pre-clamp merit can exceed 1
/// for the coolest/smallest stars and saturates at 1 after clamping.
pub mod scoring {
    use super::gates;

    /// Effective temperature at which the merit ramp saturates (K)
    pub const TEFF_REF_LOW_K: f64 = 2600.0;

    /// Stellar radius at which the merit ramp saturates (solar radii)
    pub const RSTAR_REF_LOW_RSUN: f64 = 0.1;

    /// Stellar merit component weights (temperature, radius)
    pub const MERIT_TEFF_WEIGHT: f64 = 0.6;
    pub const MERIT_RADIUS_WEIGHT: f64 = 0.4;

    /// Brightness ramp references in TESS magnitude
    pub const MAG_BRIGHT_REF: f64 = 12.0;
    pub const MAG_FAINT_REF: f64 = 15.0;

    /// Depth ramp saturates at this depth (ppm); the floor is the gate value
    pub const DEPTH_REF_LOW_PPM: f64 = gates::DEPTH_PPM_MIN;
    pub const DEPTH_REF_HIGH_PPM: f64 = 7000.0;

    /// Period ramp references (days); shorter periods score higher
    pub const PERIOD_REF_SHORT_DAYS: f64 = 5.0;
    pub const PERIOD_REF_LONG_DAYS: f64 = gates::PERIOD_MAX_DAYS;

    /// Triangular duration membership: support matches the duration gate,
    /// peak at the sweet spot for single-night coverage
    pub const DURATION_PEAK_HOURS: f64 = 2.0;

    /// Observability component weights (brightness, depth, period, duration)
    pub const OBS_BRIGHTNESS_WEIGHT: f64 = 0.40;
    pub const OBS_DEPTH_WEIGHT: f64 = 0.40;
    pub const OBS_PERIOD_WEIGHT: f64 = 0.15;
    pub const OBS_DURATION_WEIGHT: f64 = 0.05;

    /// Normalization denominators are floored at this magnitude so a
    /// reconfigured reference pair can never divide by zero
    pub const MIN_DENOMINATOR: f64 = 1e-9;
}

// =============================================================================
// Disqualifying Comment Vocabulary
// =============================================================================

/// Vetting-comment tokens that disqualify a candidate when matched
/// case-insensitively as substrings.
pub const COMMENT_FLAG_SUBSTRINGS: &[&str] = &[
    "v-shaped",
    "v shaped",
    "eclips",
    "odd-even",
    "false positive",
    "retired",
    "low snr",
    "contamin",
    "centroid offset",
];

/// Short/ambiguous tokens matched only on word boundaries, so e.g. "eb"
/// never matches inside "webbing".
pub const COMMENT_FLAG_WORDS: &[&str] = &["eb", "sb2", "fp", "binary"];

// =============================================================================
// Column Name Constants
// =============================================================================

/// Canonical column names used internally and in the output catalog
pub mod columns {
    // Identifiers
    pub const TOI_ID: &str = "toi_id";
    pub const TIC_ID: &str = "tic_id";

    // Vetting
    pub const TESS_DISPOSITION: &str = "tess_disposition";
    pub const COMMENTS: &str = "comments";

    // Photometry and astrometry
    pub const TESS_MAGNITUDE: &str = "tess_magnitude";
    pub const RA: &str = "ra";
    pub const DEC: &str = "dec";

    // Transit parameters
    pub const EPOCH_BJD: &str = "epoch_bjd";
    pub const PERIOD_DAYS: &str = "period_days";
    pub const DURATION_HOURS: &str = "duration_hours";
    pub const DEPTH_PPM: &str = "depth_ppm";

    // Stellar parameters
    pub const TEFF_K: &str = "teff_k";
    pub const LOGG_CGS: &str = "logg_cgs";
    pub const RSTAR_RSUN: &str = "rstar_rsun";
    pub const MSTAR_MSUN: &str = "mstar_msun";

    // Derived score columns
    pub const SCORE_STELLAR_MERIT: &str = "score_stellar_merit";
    pub const SCORE_OBSERVABILITY: &str = "score_observability";
    pub const PRIORITY_SCORE: &str = "priority_score";

    /// Columns that must exist in the input header (fatal if absent)
    pub const REQUIRED: &[&str] = &[
        TOI_ID,
        TIC_ID,
        TESS_DISPOSITION,
        TESS_MAGNITUDE,
        RA,
        DEC,
        EPOCH_BJD,
        PERIOD_DAYS,
        DURATION_HOURS,
        DEPTH_PPM,
        TEFF_K,
        LOGG_CGS,
        RSTAR_RSUN,
        COMMENTS,
    ];

    /// Columns coerced to real numbers by the loader
    pub const NUMERIC: &[&str] = &[
        TESS_MAGNITUDE,
        RA,
        DEC,
        EPOCH_BJD,
        PERIOD_DAYS,
        DURATION_HOURS,
        DEPTH_PPM,
        TEFF_K,
        LOGG_CGS,
        RSTAR_RSUN,
        MSTAR_MSUN,
    ];

    /// Output catalog column order: every carried input column plus the
    /// three derived scores
    pub const OUTPUT: &[&str] = &[
        TOI_ID,
        TIC_ID,
        TESS_DISPOSITION,
        TESS_MAGNITUDE,
        RA,
        DEC,
        EPOCH_BJD,
        PERIOD_DAYS,
        DURATION_HOURS,
        DEPTH_PPM,
        TEFF_K,
        LOGG_CGS,
        RSTAR_RSUN,
        MSTAR_MSUN,
        COMMENTS,
        SCORE_STELLAR_MERIT,
        SCORE_OBSERVABILITY,
        PRIORITY_SCORE,
    ];

    /// Projection printed in the stdout summary
    pub const SUMMARY: &[&str] = &[
        TOI_ID,
        TIC_ID,
        TESS_MAGNITUDE,
        PERIOD_DAYS,
        PRIORITY_SCORE,
        COMMENTS,
    ];
}

// =============================================================================
// File Constants
// =============================================================================

/// Default output filename for the ranked catalog
pub const DEFAULT_OUTPUT_FILENAME: &str = "m_dwarf_candidates_ranked.csv";
