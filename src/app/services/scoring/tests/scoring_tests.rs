//! Tests for clamping, triangular membership, and the composite scores

use crate::app::models::Candidate;
use crate::app::services::scoring::{
    clamp01, duration_triangular, observability_score, score_candidate, stellar_merit_score,
};
use crate::config::PriorityWeights;

const EPSILON: f64 = 1e-12;

fn scorable_candidate() -> Candidate {
    Candidate {
        toi_id: "1000.01".to_string(),
        tic_id: "261136679".to_string(),
        tess_disposition: "PC".to_string(),
        tess_magnitude: Some(13.0),
        ra: Some(123.45),
        dec: Some(-45.6),
        epoch_bjd: Some(2459000.5),
        period_days: Some(4.0),
        duration_hours: Some(2.0),
        depth_ppm: Some(3000.0),
        teff_k: Some(3200.0),
        logg_cgs: Some(4.5),
        rstar_rsun: Some(0.3),
        mstar_msun: Some(0.3),
        comments: None,
    }
}

#[test]
fn test_clamp01_bounds() {
    assert_eq!(clamp01(Some(-0.5)), 0.0);
    assert_eq!(clamp01(Some(0.0)), 0.0);
    assert_eq!(clamp01(Some(0.37)), 0.37);
    assert_eq!(clamp01(Some(1.0)), 1.0);
    assert_eq!(clamp01(Some(3.2)), 1.0);
}

#[test]
fn test_clamp01_missing_is_zero() {
    assert_eq!(clamp01(None), 0.0);
}

#[test]
fn test_clamp01_is_idempotent() {
    for value in [-2.0, -0.1, 0.0, 0.25, 0.999, 1.0, 17.5] {
        let once = clamp01(Some(value));
        assert_eq!(clamp01(Some(once)), once);
    }
}

#[test]
fn test_triangular_zero_at_and_beyond_support() {
    assert_eq!(duration_triangular(Some(0.5)), 0.0);
    assert_eq!(duration_triangular(Some(5.0)), 0.0);
    assert_eq!(duration_triangular(Some(0.1)), 0.0);
    assert_eq!(duration_triangular(Some(8.0)), 0.0);
    assert_eq!(duration_triangular(None), 0.0);
}

#[test]
fn test_triangular_peak_is_exactly_one() {
    assert_eq!(duration_triangular(Some(2.0)), 1.0);
}

#[test]
fn test_triangular_continuous_at_peak() {
    let just_below = duration_triangular(Some(2.0 - 1e-9));
    let just_above = duration_triangular(Some(2.0 + 1e-9));
    assert!((just_below - 1.0).abs() < 1e-6);
    assert!((just_above - 1.0).abs() < 1e-6);
}

#[test]
fn test_triangular_ramp_values() {
    // Rising edge: (1.25 - 0.5) / 1.5 = 0.5
    assert!((duration_triangular(Some(1.25)) - 0.5).abs() < EPSILON);
    // Falling edge: 1 - (3.5 - 2.0) / 3.0 = 0.5
    assert!((duration_triangular(Some(3.5)) - 0.5).abs() < EPSILON);
}

#[test]
fn test_stellar_merit_known_value() {
    // teff ramp: (4000 - 3200) / 1400; radius ramp: (0.7 - 0.3) / 0.6
    let expected = 0.6 * (800.0 / 1400.0) + 0.4 * (0.4 / 0.6);
    let merit = stellar_merit_score(&scorable_candidate());
    assert!((merit - expected).abs() < EPSILON);
}

#[test]
fn test_stellar_merit_saturates_for_coolest_smallest_stars() {
    let mut candidate = scorable_candidate();
    candidate.teff_k = Some(2400.0);
    candidate.rstar_rsun = Some(0.05);
    // Both ramps exceed 1 before clamping
    let merit = stellar_merit_score(&candidate);
    assert!((merit - 1.0).abs() < EPSILON);
}

#[test]
fn test_missing_fields_floor_components_to_zero() {
    let mut candidate = scorable_candidate();
    candidate.teff_k = None;
    candidate.rstar_rsun = None;
    assert_eq!(stellar_merit_score(&candidate), 0.0);

    let mut candidate = scorable_candidate();
    candidate.tess_magnitude = None;
    candidate.depth_ppm = None;
    candidate.period_days = None;
    candidate.duration_hours = None;
    assert_eq!(observability_score(&candidate), 0.0);
}

#[test]
fn test_component_scores_stay_in_unit_interval() {
    let extremes = [
        (Some(2400.0), Some(0.05), Some(10.0), Some(50_000.0), Some(0.1), Some(2.0)),
        (Some(4000.0), Some(0.7), Some(16.0), Some(100.0), Some(20.0), Some(6.0)),
    ];
    for (teff, rstar, mag, depth, period, duration) in extremes {
        let mut candidate = scorable_candidate();
        candidate.teff_k = teff;
        candidate.rstar_rsun = rstar;
        candidate.tess_magnitude = mag;
        candidate.depth_ppm = depth;
        candidate.period_days = period;
        candidate.duration_hours = duration;

        let merit = stellar_merit_score(&candidate);
        let obs = observability_score(&candidate);
        assert!((0.0..=1.0).contains(&merit), "merit {merit} out of range");
        assert!((0.0..=1.0).contains(&obs), "observability {obs} out of range");
    }
}

#[test]
fn test_priority_non_decreasing_in_depth() {
    let weights = PriorityWeights::default();
    let mut previous = f64::NEG_INFINITY;
    for depth in [2000.0, 3000.0, 4500.0, 7000.0, 9000.0] {
        let mut candidate = scorable_candidate();
        candidate.depth_ppm = Some(depth);
        let priority = score_candidate(&candidate, &weights).priority;
        assert!(
            priority >= previous,
            "priority decreased when depth grew to {depth}"
        );
        previous = priority;
    }
}

#[test]
fn test_priority_non_increasing_in_magnitude() {
    let weights = PriorityWeights::default();
    let mut previous = f64::INFINITY;
    for magnitude in [11.0, 12.0, 13.0, 14.0, 15.5] {
        let mut candidate = scorable_candidate();
        candidate.tess_magnitude = Some(magnitude);
        let priority = score_candidate(&candidate, &weights).priority;
        assert!(
            priority <= previous,
            "priority increased when magnitude grew to {magnitude}"
        );
        previous = priority;
    }
}

#[test]
fn test_brighter_row_outranks_fainter_twin() {
    let weights = PriorityWeights::default();
    let bright = scorable_candidate();
    let mut faint = scorable_candidate();
    faint.tess_magnitude = Some(14.0);

    let bright_priority = score_candidate(&bright, &weights).priority;
    let faint_priority = score_candidate(&faint, &weights).priority;
    assert!(bright_priority > faint_priority);
}

#[test]
fn test_priority_is_weighted_combination() {
    let candidate = scorable_candidate();

    let standard = score_candidate(&candidate, &PriorityWeights::standard());
    assert!(
        (standard.priority
            - (0.5 * standard.stellar_merit + 0.5 * standard.observability))
            .abs()
            < EPSILON
    );

    let legacy = score_candidate(&candidate, &PriorityWeights::legacy());
    assert_eq!(legacy.stellar_merit, standard.stellar_merit);
    assert_eq!(legacy.observability, standard.observability);
    assert!(
        (legacy.priority - (0.45 * legacy.stellar_merit + 0.55 * legacy.observability)).abs()
            < EPSILON
    );
}

#[test]
fn test_scoring_is_deterministic() {
    let weights = PriorityWeights::default();
    let candidate = scorable_candidate();
    let first = score_candidate(&candidate, &weights);
    let second = score_candidate(&candidate, &weights);
    assert_eq!(first, second);
}
