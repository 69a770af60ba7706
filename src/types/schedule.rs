use serde::Serialize;

use crate::allocate::round_to_hundredth;
use crate::types::request::ScheduleRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub subject: String,
    pub allocated_hours: f64,
}

/// A result row: the subject as entered plus its recommended hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub subject: String,
    pub marks: f64,
    pub attendance: f64,
    pub importance: i64,
    pub recommended_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    pub total_hours: f64,
    pub rows: Vec<ScheduleRow>,
    /// Sum of the rounded per-subject hours.
    pub total_allocated: f64,
    /// `total_allocated - total_hours`. Non-zero values come from per-row rounding.
    pub drift: f64,
    pub generated_at: String,
}

impl ScheduleReport {
    pub fn new(request: &ScheduleRequest, hours: &[f64], generated_at: String) -> Self {
        let rows: Vec<ScheduleRow> = request
            .subjects
            .iter()
            .zip(hours)
            .map(|(subject, hours)| ScheduleRow {
                subject: subject.name.clone(),
                marks: subject.marks,
                attendance: subject.attendance,
                importance: subject.importance,
                recommended_hours: *hours,
            })
            .collect();
        let total_allocated =
            round_to_hundredth(rows.iter().map(|row| row.recommended_hours).sum());
        let drift = round_to_hundredth(total_allocated - request.total_hours);

        Self {
            student: request.student.clone(),
            total_hours: request.total_hours,
            rows,
            total_allocated,
            drift,
            generated_at,
        }
    }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.rows
            .iter()
            .map(|row| Allocation {
                subject: row.subject.clone(),
                allocated_hours: row.recommended_hours,
            })
            .collect()
    }

    pub fn has_drift(&self) -> bool {
        self.drift != 0.0
    }

    pub fn max_hours(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.recommended_hours)
            .fold(0.0, f64::max)
    }
}
