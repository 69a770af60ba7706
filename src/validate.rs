use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;

use crate::types::request::ScheduleRequest;

pub const TOTAL_HOURS_RANGE: RangeInclusive<f64> = 1.0..=24.0;
pub const SUBJECT_COUNT_RANGE: RangeInclusive<usize> = 1..=10;
pub const PERCENT_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const IMPORTANCE_RANGE: RangeInclusive<i64> = 1..=10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("invalid request: {}", summary(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks every field of the request and reports all problems at once.
pub fn validate(request: &ScheduleRequest) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if !request.total_hours.is_finite() || !TOTAL_HOURS_RANGE.contains(&request.total_hours) {
        issues.push(ValidationIssue::new(
            "total_hours",
            format!("must be between 1 and 24 (found {})", request.total_hours),
        ));
    }

    let count = request.subjects.len();
    if !SUBJECT_COUNT_RANGE.contains(&count) {
        issues.push(ValidationIssue::new(
            "subjects",
            format!("between 1 and 10 subjects are required (found {count})"),
        ));
    }

    for (index, subject) in request.subjects.iter().enumerate() {
        if subject.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("subjects[{index}].name"),
                "please enter a name for every subject",
            ));
        }
        check_percent(&mut issues, index, "marks", subject.marks);
        check_percent(&mut issues, index, "attendance", subject.attendance);
        if !IMPORTANCE_RANGE.contains(&subject.importance) {
            issues.push(ValidationIssue::new(
                format!("subjects[{index}].importance"),
                format!("must be between 1 and 10 (found {})", subject.importance),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

fn check_percent(issues: &mut Vec<ValidationIssue>, index: usize, field: &str, value: f64) {
    if !value.is_finite() || !PERCENT_RANGE.contains(&value) {
        issues.push(ValidationIssue::new(
            format!("subjects[{index}].{field}"),
            format!("must be between 0 and 100 (found {value})"),
        ));
    }
}
