//! Medication models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single medication's prescription context as known at planning time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationSpan {
    /// Local UUID - generated when the span is built
    pub medication_id: String,
    /// Display name (e.g., "Sertraline")
    pub medication_name: String,
    /// Date the medication was started (RFC 3339)
    pub start_date: String,
    /// Current dose in milligrams - None means unknown/not prescribed
    pub dose_mg: Option<f64>,
    /// Whether the medication is currently prescribed
    pub is_active: bool,
}

impl MedicationSpan {
    /// Create a new span with required fields.
    pub fn new(medication_name: String, dose_mg: Option<f64>) -> Self {
        Self {
            medication_id: uuid::Uuid::new_v4().to_string(),
            medication_name,
            start_date: chrono::Utc::now().to_rfc3339(),
            dose_mg,
            is_active: true,
        }
    }

    /// Check whether the span carries a dose that can be stepped down to the given floor.
    pub fn has_taperable_dose(&self, min_dose_mg: f64) -> bool {
        match self.dose_mg {
            Some(dose) => dose.is_finite() && dose > 0.0 && dose > min_dose_mg,
            None => false,
        }
    }
}

/// Timeline event classes for a medication history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationEventKind {
    /// Medication newly started
    Start,
    /// Dose adjusted up or down
    DoseChange,
    /// Medication discontinued
    Stop,
}

impl FromStr for MedicationEventKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "dose-change" => Ok(Self::DoseChange),
            "stop" => Ok(Self::Stop),
            other => Err(anyhow::anyhow!("unknown event kind: {}", other)),
        }
    }
}

impl fmt::Display for MedicationEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::DoseChange => write!(f, "dose-change"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = MedicationSpan::new("Sertraline".into(), Some(100.0));
        assert_eq!(span.medication_name, "Sertraline");
        assert_eq!(span.dose_mg, Some(100.0));
        assert!(span.is_active);
        assert_eq!(span.medication_id.len(), 36); // UUID format
    }

    #[test]
    fn test_taperable_dose() {
        let span = MedicationSpan::new("Sertraline".into(), Some(100.0));
        assert!(span.has_taperable_dose(0.0));
        assert!(span.has_taperable_dose(50.0));
        assert!(!span.has_taperable_dose(100.0));
        assert!(!span.has_taperable_dose(150.0));
    }

    #[test]
    fn test_missing_or_zero_dose_is_not_taperable() {
        let unknown = MedicationSpan::new("Sertraline".into(), None);
        assert!(!unknown.has_taperable_dose(0.0));

        let zero = MedicationSpan::new("Sertraline".into(), Some(0.0));
        assert!(!zero.has_taperable_dose(0.0));
    }

    #[test]
    fn test_non_finite_dose_is_not_taperable() {
        let infinite = MedicationSpan::new("Sertraline".into(), Some(f64::INFINITY));
        assert!(!infinite.has_taperable_dose(0.0));

        let nan = MedicationSpan::new("Sertraline".into(), Some(f64::NAN));
        assert!(!nan.has_taperable_dose(0.0));
    }

    #[test]
    fn test_event_kind_from_str() {
        assert_eq!(
            "start".parse::<MedicationEventKind>().unwrap(),
            MedicationEventKind::Start
        );
        assert_eq!(
            "dose-change".parse::<MedicationEventKind>().unwrap(),
            MedicationEventKind::DoseChange
        );
        assert_eq!(
            "stop".parse::<MedicationEventKind>().unwrap(),
            MedicationEventKind::Stop
        );
        assert!("paused".parse::<MedicationEventKind>().is_err());
    }

    #[test]
    fn test_event_kind_display_round_trip() {
        for kind in [
            MedicationEventKind::Start,
            MedicationEventKind::DoseChange,
            MedicationEventKind::Stop,
        ] {
            let wire = kind.to_string();
            assert_eq!(wire.parse::<MedicationEventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_event_kind_wire_names() {
        let json = serde_json::to_string(&MedicationEventKind::DoseChange).unwrap();
        assert_eq!(json, "\"dose-change\"");

        let kind: MedicationEventKind = serde_json::from_str("\"stop\"").unwrap();
        assert_eq!(kind, MedicationEventKind::Stop);
    }
}
