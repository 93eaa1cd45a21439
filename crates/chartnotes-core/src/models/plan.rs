//! Taper plan models.

use serde::{Deserialize, Serialize};

/// Annotation on the unmodified current-dose row.
pub const CURRENT_DOSE_NOTE: &str = "Current dose";

/// Annotation on the terminal floor-dose row.
pub const DISCONTINUE_NOTE: &str = "Discontinue";

/// Configuration for taper plan computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaperOptions {
    /// Percentage of the current dose removed at each step
    pub reduction_percent: f64,
    /// Calendar weeks between steps
    pub interval_weeks: u32,
    /// Dose floor at which the plan ends
    pub min_dose_mg: f64,
}

impl Default for TaperOptions {
    fn default() -> Self {
        Self {
            reduction_percent: 25.0,
            interval_weeks: 2,
            min_dose_mg: 0.0,
        }
    }
}

/// One row of a computed taper plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaperStep {
    /// Calendar date this step takes effect (RFC 3339)
    pub date: String,
    /// Dose at this step in milligrams
    pub dose_mg: f64,
    /// Cumulative weeks from plan start; 0 for the current-dose row
    pub week_number: u32,
    /// Row annotation
    pub notes: String,
}

impl TaperStep {
    /// Check whether this row ends the plan at the configured floor.
    pub fn is_discontinuation(&self) -> bool {
        self.notes == DISCONTINUE_NOTE
    }
}

/// Serialize a plan to JSON for API responses.
pub fn plan_to_json(steps: &[TaperStep]) -> Result<String, serde_json::Error> {
    serde_json::to_string(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TaperOptions::default();
        assert_eq!(options.reduction_percent, 25.0);
        assert_eq!(options.interval_weeks, 2);
        assert_eq!(options.min_dose_mg, 0.0);
    }

    #[test]
    fn test_is_discontinuation() {
        let terminal = TaperStep {
            date: "2023-12-01T00:00:00+00:00".into(),
            dose_mg: 0.0,
            week_number: 8,
            notes: DISCONTINUE_NOTE.into(),
        };
        assert!(terminal.is_discontinuation());

        let intermediate = TaperStep {
            date: "2023-12-01T00:00:00+00:00".into(),
            dose_mg: 65.0,
            week_number: 2,
            notes: "25% reduction".into(),
        };
        assert!(!intermediate.is_discontinuation());
    }

    #[test]
    fn test_plan_to_json() {
        let steps = vec![TaperStep {
            date: "2023-12-01T00:00:00+00:00".into(),
            dose_mg: 87.0,
            week_number: 0,
            notes: CURRENT_DOSE_NOTE.into(),
        }];

        let json = plan_to_json(&steps).unwrap();
        assert!(json.contains("\"dose_mg\":87.0"));
        assert!(json.contains(CURRENT_DOSE_NOTE));

        let round_trip: Vec<TaperStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip, steps);
    }
}
