//! Taper plan computation.
//!
//! Pipeline: MedicationSpan → step-down loop → ordered Vec<TaperStep>
//!
//! Each step removes a fixed percentage of the previous dose, clamps the
//! result to the configured floor, snaps it to the dispensing grid, and
//! stamps a calendar date a fixed number of weeks after the previous step.
//! The plan always ends with a row at exactly the floor dose.

mod rounding;

pub use rounding::round_dose;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::models::{
    MedicationSpan, TaperOptions, TaperStep, CURRENT_DOSE_NOTE, DISCONTINUE_NOTE,
};

/// Planner errors.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("reduction percent must be a positive finite number, got {0}")]
    InvalidReductionPercent(f64),

    #[error("interval weeks must be at least one")]
    InvalidIntervalWeeks,

    #[error("minimum dose must be a non-negative finite number, got {0}")]
    InvalidMinDose(f64),
}

pub type PlanResult<T> = Result<T, PlanError>;

/// Planner for dose step-down schedules.
pub struct TaperPlanner {
    options: TaperOptions,
}

impl Default for TaperPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaperPlanner {
    /// Create a planner with default options.
    pub fn new() -> Self {
        Self {
            options: TaperOptions::default(),
        }
    }

    /// Create a planner with validated options.
    pub fn with_options(options: TaperOptions) -> PlanResult<Self> {
        validate_options(&options)?;
        Ok(Self { options })
    }

    /// Options in effect for this planner.
    pub fn options(&self) -> &TaperOptions {
        &self.options
    }

    /// Compute the step-down schedule, with step dates anchored to `plan_start`.
    ///
    /// Returns an empty plan when the span has no dose, a zero dose, or a
    /// dose at or below the configured floor. Otherwise the first row is
    /// the unmodified current dose and the last row is the floor dose
    /// marked for discontinuation.
    pub fn plan(&self, span: &MedicationSpan, plan_start: DateTime<Utc>) -> Vec<TaperStep> {
        let min_dose = self.options.min_dose_mg;
        if !span.has_taperable_dose(min_dose) {
            return Vec::new();
        }
        let current = span.dose_mg.unwrap_or_default();

        let mut steps = vec![TaperStep {
            date: plan_start.to_rfc3339(),
            dose_mg: current,
            week_number: 0,
            notes: CURRENT_DOSE_NOTE.to_string(),
        }];

        let mut dose = current;
        let mut week = 0u32;

        loop {
            week += self.options.interval_weeks;
            let date = step_date(plan_start, week);

            let mut candidate = dose - dose * (self.options.reduction_percent / 100.0);
            if candidate < min_dose {
                candidate = min_dose;
            }
            let rounded = round_dose(candidate);

            // Stop once the grid lands on or below the floor, or stops
            // descending (small doses can round back onto themselves).
            if rounded <= min_dose || rounded >= dose {
                steps.push(TaperStep {
                    date,
                    dose_mg: min_dose,
                    week_number: week,
                    notes: DISCONTINUE_NOTE.to_string(),
                });
                break;
            }

            steps.push(TaperStep {
                date,
                dose_mg: rounded,
                week_number: week,
                notes: format!("{}% reduction", self.options.reduction_percent),
            });
            dose = rounded;
        }

        steps
    }

    /// Compute the schedule anchored to the current wall-clock date.
    pub fn plan_from_now(&self, span: &MedicationSpan) -> Vec<TaperStep> {
        self.plan(span, Utc::now())
    }
}

/// Compute a taper plan with caller-supplied or default options, anchored to now.
pub fn compute_taper(
    span: &MedicationSpan,
    options: Option<TaperOptions>,
) -> PlanResult<Vec<TaperStep>> {
    let planner = match options {
        Some(options) => TaperPlanner::with_options(options)?,
        None => TaperPlanner::new(),
    };
    Ok(planner.plan_from_now(span))
}

fn validate_options(options: &TaperOptions) -> PlanResult<()> {
    if !options.reduction_percent.is_finite() || options.reduction_percent <= 0.0 {
        return Err(PlanError::InvalidReductionPercent(
            options.reduction_percent,
        ));
    }
    if options.interval_weeks == 0 {
        return Err(PlanError::InvalidIntervalWeeks);
    }
    if !options.min_dose_mg.is_finite() || options.min_dose_mg < 0.0 {
        return Err(PlanError::InvalidMinDose(options.min_dose_mg));
    }
    Ok(())
}

fn step_date(plan_start: DateTime<Utc>, week: u32) -> String {
    (plan_start + Duration::weeks(i64::from(week))).to_rfc3339()
}
