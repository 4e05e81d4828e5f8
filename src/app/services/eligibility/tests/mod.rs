//! Tests for eligibility filtering


use crate::app::models::Candidate;

/// A candidate that passes every eligibility gate
pub fn eligible_candidate() -> Candidate {
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
