use serde::Serialize;

use crate::error::PlannerError;
use crate::types::schedule::{ScheduleReport, ScheduleRow};

#[derive(Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "Current Marks")]
    marks: f64,
    #[serde(rename = "Attendance (%)")]
    attendance: f64,
    #[serde(rename = "Importance")]
    importance: i64,
    #[serde(rename = "Recommended Hours")]
    recommended_hours: f64,
}

impl<'a> From<&'a ScheduleRow> for CsvRecord<'a> {
    fn from(row: &'a ScheduleRow) -> Self {
        Self {
            subject: &row.subject,
            marks: row.marks,
            attendance: row.attendance,
            importance: row.importance,
            recommended_hours: row.recommended_hours,
        }
    }
}

pub fn to_csv(report: &ScheduleReport) -> Result<String, PlannerError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for row in &report.rows {
        writer.serialize(CsvRecord::from(row))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PlannerError::Render(e.to_string()))
}
