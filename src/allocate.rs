//! Proportional split of a study-hour budget.
//!
//! Each subject gets a weight `(1 - marks/100) + (1 - attendance/100) + importance/10`,
//! weights are normalized to sum to one, and the budget is split accordingly.
//! Every share is rounded to one decimal, half away from zero, so the rounded
//! shares may not add up to the budget exactly.

use thiserror::Error;
use tracing::debug;

/// Scaled values within this distance of `.5` are treated as exact ties.
const TIE_EPSILON: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("no subjects to allocate hours to")]
    NoSubjects,

    #[error(
        "input lengths differ (marks: {marks}, attendance: {attendance}, importance: {importance})"
    )]
    LengthMismatch {
        marks: usize,
        attendance: usize,
        importance: usize,
    },

    #[error("subject weights sum to {total}; cannot normalize")]
    DegenerateWeights { total: f64 },
}

pub fn subject_weight(marks: f64, attendance: f64, importance: u8) -> f64 {
    let marks_weight = 1.0 - marks / 100.0;
    let attendance_weight = 1.0 - attendance / 100.0;
    let importance_weight = f64::from(importance) / 10.0;
    marks_weight + attendance_weight + importance_weight
}

/// Divides every weight by the sum of all weights.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>, AllocationError> {
    if weights.is_empty() {
        return Err(AllocationError::NoSubjects);
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(AllocationError::DegenerateWeights { total });
    }
    Ok(weights.iter().map(|weight| weight / total).collect())
}

pub fn allocate(
    total_hours: f64,
    marks: &[f64],
    attendance: &[f64],
    importance: &[u8],
) -> Result<Vec<f64>, AllocationError> {
    if marks.len() != attendance.len() || marks.len() != importance.len() {
        return Err(AllocationError::LengthMismatch {
            marks: marks.len(),
            attendance: attendance.len(),
            importance: importance.len(),
        });
    }

    let weights: Vec<f64> = marks
        .iter()
        .zip(attendance)
        .zip(importance)
        .map(|((marks, attendance), importance)| {
            subject_weight(*marks, *attendance, *importance)
        })
        .collect();
    debug!(?weights, "computed subject weights");

    let hours: Vec<f64> = normalize(&weights)?
        .into_iter()
        .map(|share| round_to_tenth(share * total_hours))
        .collect();
    debug!(total_hours, ?hours, "allocated study hours");
    Ok(hours)
}

/// Rounds to one decimal place, ties away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_away(value, 10.0)
}

pub fn round_to_hundredth(value: f64) -> f64 {
    round_half_away(value, 100.0)
}

fn round_half_away(value: f64, scale: f64) -> f64 {
    let scaled = value * scale;
    let floor = scaled.floor();
    let rounded = if ((scaled - floor) - 0.5).abs() < TIE_EPSILON {
        if scaled >= 0.0 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        scaled.round()
    };
    rounded / scale
}
