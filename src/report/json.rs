use crate::types::schedule::ScheduleReport;

pub fn to_json(report: &ScheduleReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
