//! Tiered dose rounding.
//!
//! Computed doses snap to realistic dispensing increments: 5 mg steps for
//! larger doses, 0.5 mg for mid-range doses, 0.1 mg for sub-milligram
//! liquid dosing. Ties round away from zero.

/// Doses above this round to the nearest 5 mg.
const COARSE_TIER_MG: f64 = 10.0;

/// Doses above this (up to the coarse tier) round to the nearest 0.5 mg.
const MID_TIER_MG: f64 = 1.0;

/// Round a computed dose to the nearest dispensable increment.
pub fn round_dose(dose_mg: f64) -> f64 {
    if dose_mg > COARSE_TIER_MG {
        (dose_mg / 5.0).round() * 5.0
    } else if dose_mg > MID_TIER_MG {
        (dose_mg * 2.0).round() / 2.0
    } else {
        (dose_mg * 10.0).round() / 10.0
    }
}
