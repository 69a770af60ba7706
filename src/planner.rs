use chrono::Utc;
use tracing::{debug, info};

use crate::allocate;
use crate::error::Result;
use crate::types::request::ScheduleRequest;
use crate::types::schedule::ScheduleReport;
use crate::validate;

/// Validates the request, then splits its hour budget across subjects.
pub fn generate(request: &ScheduleRequest) -> Result<ScheduleReport> {
    validate::validate(request)?;
    debug!(subjects = request.subjects.len(), "request passed validation");

    let hours = allocate::allocate(
        request.total_hours,
        &request.marks(),
        &request.attendance(),
        &request.importance(),
    )?;

    let report = ScheduleReport::new(request, &hours, Utc::now().to_rfc3339());
    debug!(allocations = ?report.allocations(), "schedule result");
    info!(
        subjects = report.rows.len(),
        total_hours = report.total_hours,
        drift = report.drift,
        "schedule generated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::types::request::SubjectRecord;

    #[test]
    fn generate_returns_rows_in_input_order() {
        let request = ScheduleRequest::new(
            10.0,
            vec![
                SubjectRecord::new("A", 90.0, 90.0, 1),
                SubjectRecord::new("B", 40.0, 40.0, 9),
            ],
        );
        let report = generate(&request).expect("valid request should generate");
        let hours: Vec<_> = report.rows.iter().map(|row| row.recommended_hours).collect();
        assert_eq!(hours, vec![1.3, 8.8]);
        assert_eq!(report.rows[0].subject, "A");
        assert_eq!(report.drift, 0.1);
    }

    #[test]
    fn generate_stops_at_validation() {
        let request = ScheduleRequest::new(8.0, vec![SubjectRecord::new("", 50.0, 50.0, 5)]);
        let err = generate(&request).expect_err("blank name should fail validation");
        assert!(matches!(err, PlannerError::Validation(_)));
    }
}
