//! Medication timeline presentation helpers.

use crate::models::MedicationEventKind;

use super::parse_display_date;

/// Fixed warning fill for doses flagged above the guideline maximum.
pub const ABOVE_GUIDELINE_FILL: &str = "rgba(255,171,0,0.85)";

/// Fallback fill when dose or guideline data is missing.
pub const DEFAULT_FILL: &str = "rgba(59,130,246,0.6)";

/// Warning suffix appended to tooltips for above-guideline doses.
pub const ABOVE_GUIDELINE_WARNING: &str = "⚠️ Above recommended max";

/// Opacity at zero dose intensity.
const MIN_OPACITY: f64 = 0.3;

/// Opacity span from zero to full intensity.
const OPACITY_RANGE: f64 = 0.7;

/// Encode a dose as an RGBA fill for a visual intensity bar.
///
/// The above-guideline flag wins over the numeric inputs; missing numbers
/// fall back to [`DEFAULT_FILL`]; otherwise opacity scales linearly with
/// the dose-to-guideline ratio, capped at full intensity.
pub fn bar_fill(
    dose_mg: Option<f64>,
    max_guideline_dose_mg: Option<f64>,
    is_above_guideline: bool,
) -> String {
    if is_above_guideline {
        return ABOVE_GUIDELINE_FILL.to_string();
    }

    let (dose, max) = match (dose_mg, max_guideline_dose_mg) {
        (Some(dose), Some(max)) => (dose, max),
        _ => return DEFAULT_FILL.to_string(),
    };

    let ratio = (dose / max).min(1.0);
    format!("rgba(59,130,246,{})", MIN_OPACITY + ratio * OPACITY_RANGE)
}

/// Trend icon for a dose change. Empty when either side is missing.
pub fn dose_change_icon(old_dose_mg: Option<f64>, new_dose_mg: Option<f64>) -> &'static str {
    let (old, new) = match (old_dose_mg, new_dose_mg) {
        (Some(old), Some(new)) => (old, new),
        _ => return "",
    };

    if new > old {
        "▲"
    } else if new < old {
        "▼"
    } else {
        "●"
    }
}

/// Check whether a dose strictly exceeds the guideline maximum.
///
/// Missing dose or guideline data never flags.
pub fn exceeds_guideline(dose_mg: Option<f64>, max_guideline_dose_mg: Option<f64>) -> bool {
    match (dose_mg, max_guideline_dose_mg) {
        (Some(dose), Some(max)) => dose > max,
        _ => false,
    }
}

/// One-line tooltip for a medication timeline event.
///
/// Composition order is fixed: base text for the event kind, then the
/// guideline warning, then the outcome text verbatim.
pub fn format_tooltip_text(
    kind: MedicationEventKind,
    medication_name: &str,
    date: &str,
    dose_mg: Option<f64>,
    note: Option<&str>,
    is_above_guideline: bool,
    outcome_text: Option<&str>,
) -> String {
    let month_year = format_month_year(date);

    let mut text = match kind {
        MedicationEventKind::Start => match dose_mg {
            Some(dose) => format!("Started {} {} mg {}", medication_name, dose, month_year),
            None => format!("Started {} {}", medication_name, month_year),
        },
        MedicationEventKind::DoseChange => match dose_mg {
            Some(dose) => format!("Changed to {} mg {}", dose, month_year),
            None => format!("Changed to {}", month_year),
        },
        MedicationEventKind::Stop => {
            let mut text = format!("Discontinued {}", month_year);
            if let Some(note) = note {
                text.push_str(&format!(" – {}", note));
            }
            text
        }
    };

    if is_above_guideline {
        text.push_str(&format!(" {}", ABOVE_GUIDELINE_WARNING));
    }
    if let Some(outcome) = outcome_text {
        text.push_str(&format!(" {}", outcome));
    }

    text
}

fn format_month_year(value: &str) -> String {
    match parse_display_date(value) {
        Some(date) => date.format("%b %Y").to_string(),
        None => value.to_string(),
    }
}
