//! Chartnotes Core Library
//!
//! Medication taper planning and timeline presentation for the Chartnotes
//! clinical note-taking app.
//!
//! # Architecture
//!
//! ```text
//! MedicationSpan ──▶ TaperPlanner ──▶ ordered Vec<TaperStep>
//!                                             │
//!                     ┌───────────────────────┼───────────────────────┐
//!                     ▼                       ▼                       ▼
//!              Markdown table           Intensity bar            Tooltip text
//!         (render_markdown_table)        (bar_fill)         (format_tooltip_text)
//! ```
//!
//! # Core Principle
//!
//! **The core is pure.** No persistence, no network, no shared mutable
//! state. Callers (route handlers, the timeline UI) own all I/O and feed
//! values in; formatted strings come back verbatim for display.
//!
//! # Modules
//!
//! - [`models`]: Domain types (MedicationSpan, TaperStep, TaperOptions, ...)
//! - [`planner`]: Dose step-down scheduling with tiered rounding
//! - [`render`]: Display formatting (markdown table, colors, icons, tooltips)

pub mod models;
pub mod planner;
pub mod render;

// Re-export commonly used types
pub use models::{
    plan_to_json, MedicationEventKind, MedicationSpan, TaperOptions, TaperStep,
    CURRENT_DOSE_NOTE, DISCONTINUE_NOTE,
};
pub use planner::{compute_taper, round_dose, PlanError, TaperPlanner};
pub use render::{
    bar_fill, dose_change_icon, exceeds_guideline, format_tooltip_text,
    render_markdown_table, ABOVE_GUIDELINE_FILL, ABOVE_GUIDELINE_WARNING, DEFAULT_FILL,
    EMPTY_PLAN_TEXT,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ChartNotesError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<PlanError> for ChartNotesError {
    fn from(e: PlanError) -> Self {
        ChartNotesError::InvalidConfiguration(e.to_string())
    }
}

impl From<serde_json::Error> for ChartNotesError {
    fn from(e: serde_json::Error) -> Self {
        ChartNotesError::SerializationError(e.to_string())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medication span.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicationSpan {
    pub medication_id: String,
    pub medication_name: String,
    pub start_date: String,
    pub dose_mg: Option<f64>,
    pub is_active: bool,
}

impl From<MedicationSpan> for FfiMedicationSpan {
    fn from(span: MedicationSpan) -> Self {
        Self {
            medication_id: span.medication_id,
            medication_name: span.medication_name,
            start_date: span.start_date,
            dose_mg: span.dose_mg,
            is_active: span.is_active,
        }
    }
}

impl From<FfiMedicationSpan> for MedicationSpan {
    fn from(span: FfiMedicationSpan) -> Self {
        MedicationSpan {
            medication_id: span.medication_id,
            medication_name: span.medication_name,
            start_date: span.start_date,
            dose_mg: span.dose_mg,
            is_active: span.is_active,
        }
    }
}

/// FFI-safe taper options.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTaperOptions {
    pub reduction_percent: f64,
    pub interval_weeks: u32,
    pub min_dose_mg: f64,
}

impl From<FfiTaperOptions> for TaperOptions {
    fn from(options: FfiTaperOptions) -> Self {
        TaperOptions {
            reduction_percent: options.reduction_percent,
            interval_weeks: options.interval_weeks,
            min_dose_mg: options.min_dose_mg,
        }
    }
}

impl From<TaperOptions> for FfiTaperOptions {
    fn from(options: TaperOptions) -> Self {
        Self {
            reduction_percent: options.reduction_percent,
            interval_weeks: options.interval_weeks,
            min_dose_mg: options.min_dose_mg,
        }
    }
}

/// FFI-safe taper step.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTaperStep {
    pub date: String,
    pub dose_mg: f64,
    pub week_number: u32,
    pub notes: String,
}

impl From<TaperStep> for FfiTaperStep {
    fn from(step: TaperStep) -> Self {
        Self {
            date: step.date,
            dose_mg: step.dose_mg,
            week_number: step.week_number,
            notes: step.notes,
        }
    }
}

impl From<FfiTaperStep> for TaperStep {
    fn from(step: FfiTaperStep) -> Self {
        TaperStep {
            date: step.date,
            dose_mg: step.dose_mg,
            week_number: step.week_number,
            notes: step.notes,
        }
    }
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Compute a taper plan for a medication span.
#[uniffi::export]
pub fn compute_taper_plan(
    span: FfiMedicationSpan,
    options: Option<FfiTaperOptions>,
) -> Result<Vec<FfiTaperStep>, ChartNotesError> {
    let span: MedicationSpan = span.into();
    let steps = compute_taper(&span, options.map(Into::into))?;
    Ok(steps.into_iter().map(Into::into).collect())
}

/// Compute a taper plan and serialize it as JSON for API responses.
#[uniffi::export]
pub fn compute_taper_plan_json(
    span: FfiMedicationSpan,
    options: Option<FfiTaperOptions>,
) -> Result<String, ChartNotesError> {
    let span: MedicationSpan = span.into();
    let steps = compute_taper(&span, options.map(Into::into))?;
    Ok(plan_to_json(&steps)?)
}

/// Render a plan as a markdown table.
#[uniffi::export]
pub fn render_taper_table(steps: Vec<FfiTaperStep>) -> String {
    let steps: Vec<TaperStep> = steps.into_iter().map(Into::into).collect();
    render_markdown_table(&steps)
}

/// RGBA fill encoding a dose's intensity relative to the guideline maximum.
#[uniffi::export]
pub fn dose_bar_fill(
    dose_mg: Option<f64>,
    max_guideline_dose_mg: Option<f64>,
    is_above_guideline: bool,
) -> String {
    bar_fill(dose_mg, max_guideline_dose_mg, is_above_guideline)
}

/// Trend icon for a dose change.
#[uniffi::export]
pub fn dose_trend_icon(old_dose_mg: Option<f64>, new_dose_mg: Option<f64>) -> String {
    dose_change_icon(old_dose_mg, new_dose_mg).to_string()
}

/// Check whether a dose exceeds the guideline maximum.
#[uniffi::export]
pub fn dose_exceeds_guideline(
    dose_mg: Option<f64>,
    max_guideline_dose_mg: Option<f64>,
) -> bool {
    exceeds_guideline(dose_mg, max_guideline_dose_mg)
}

/// One-line tooltip for a medication timeline event.
///
/// `event_kind` is the wire name: "start", "dose-change", or "stop".
#[uniffi::export]
pub fn medication_tooltip(
    event_kind: String,
    medication_name: String,
    date: String,
    dose_mg: Option<f64>,
    note: Option<String>,
    is_above_guideline: bool,
    outcome_text: Option<String>,
) -> Result<String, ChartNotesError> {
    let kind: MedicationEventKind = event_kind
        .parse()
        .map_err(|e: anyhow::Error| ChartNotesError::InvalidInput(e.to_string()))?;

    Ok(format_tooltip_text(
        kind,
        &medication_name,
        &date,
        dose_mg,
        note.as_deref(),
        is_above_guideline,
        outcome_text.as_deref(),
    ))
}
