pub mod chart;
pub mod csv;
pub mod html;
pub mod json;
pub mod md;
pub mod table;

use crate::error::PlannerError;
use crate::types::config::OutputFormatSetting;
use crate::types::schedule::ScheduleReport;

/// Column headings shared by every tabular rendering.
pub const COLUMNS: [&str; 5] = [
    "Subject",
    "Current Marks",
    "Attendance (%)",
    "Importance",
    "Recommended Hours",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Md,
    Json,
    Csv,
}

impl From<OutputFormatSetting> for OutputFormat {
    fn from(setting: OutputFormatSetting) -> Self {
        match setting {
            OutputFormatSetting::Table => OutputFormat::Table,
            OutputFormatSetting::Md => OutputFormat::Md,
            OutputFormatSetting::Json => OutputFormat::Json,
            OutputFormatSetting::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub chart: bool,
    pub chart_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chart: true,
            chart_width: crate::types::config::DEFAULT_CHART_WIDTH,
        }
    }
}

pub fn render(
    report: &ScheduleReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Table => Ok(table::to_table(report, options)),
        OutputFormat::Md => Ok(md::to_markdown(report, options)),
        OutputFormat::Json => json::to_json(report).map_err(PlannerError::Json),
        OutputFormat::Csv => csv::to_csv(report),
    }
}

/// Cell values for one row, in `COLUMNS` order.
pub(crate) fn row_cells(row: &crate::types::schedule::ScheduleRow) -> [String; 5] {
    [
        row.subject.clone(),
        row.marks.to_string(),
        row.attendance.to_string(),
        row.importance.to_string(),
        format!("{:.1}", row.recommended_hours),
    ]
}

pub(crate) fn drift_note(report: &ScheduleReport) -> Option<String> {
    report.has_drift().then(|| {
        format!(
            "Note: rounded hours add up to {:.1} ({:+.1} vs. the {} hour budget).",
            report.total_allocated, report.drift, report.total_hours
        )
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::request::{ScheduleRequest, SubjectRecord};
    use crate::types::schedule::ScheduleReport;

    pub fn report() -> ScheduleReport {
        let request = ScheduleRequest::new(
            10.0,
            vec![
                SubjectRecord::new("Math", 90.0, 90.0, 1),
                SubjectRecord::new("Physics", 40.0, 40.5, 9),
            ],
        )
        .with_student("Ada");
        ScheduleReport::new(&request, &[1.3, 8.8], "2026-01-01T00:00:00+00:00".to_string())
    }
}
