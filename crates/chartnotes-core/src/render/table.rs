//! Markdown table rendering for taper plans.

use crate::models::TaperStep;

use super::parse_display_date;

/// Sentinel returned for an empty plan.
pub const EMPTY_PLAN_TEXT: &str = "No taper plan available.";

/// Render a plan as a markdown table.
///
/// Dates render as "MMM D, YYYY" (e.g. "Dec 1, 2023"); a date that fails
/// to parse is echoed verbatim.
pub fn render_markdown_table(steps: &[TaperStep]) -> String {
    if steps.is_empty() {
        return EMPTY_PLAN_TEXT.to_string();
    }

    let mut table = String::new();
    table.push_str("| Week | Date | Dose (mg) | Notes |\n");
    table.push_str("|------|------|-----------|-------|\n");

    for step in steps {
        table.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            step.week_number,
            format_table_date(&step.date),
            step.dose_mg,
            step.notes,
        ));
    }

    table
}

fn format_table_date(value: &str) -> String {
    match parse_display_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}
