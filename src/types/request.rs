use serde::{Deserialize, Serialize};

/// One subject as entered by the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    /// Current marks, percent.
    pub marks: f64,
    /// Attendance, percent.
    pub attendance: f64,
    /// 1 (low) to 10 (high). Read wide so out-of-range input reaches validation.
    pub importance: i64,
}

impl SubjectRecord {
    pub fn new(name: impl Into<String>, marks: f64, attendance: f64, importance: i64) -> Self {
        Self {
            name: name.into(),
            marks,
            attendance,
            importance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    pub total_hours: f64,
    pub subjects: Vec<SubjectRecord>,
}

impl ScheduleRequest {
    pub fn new(total_hours: f64, subjects: Vec<SubjectRecord>) -> Self {
        Self {
            student: None,
            total_hours,
            subjects,
        }
    }

    pub fn with_student(mut self, student: impl Into<String>) -> Self {
        let student = student.into();
        self.student = if student.trim().is_empty() {
            None
        } else {
            Some(student)
        };
        self
    }

    pub fn marks(&self) -> Vec<f64> {
        self.subjects.iter().map(|subject| subject.marks).collect()
    }

    pub fn attendance(&self) -> Vec<f64> {
        self.subjects
            .iter()
            .map(|subject| subject.attendance)
            .collect()
    }

    /// Importance levels narrowed for the allocator. A level outside `u8` is
    /// left out, which the allocator reports as a length mismatch.
    pub fn importance(&self) -> Vec<u8> {
        self.subjects
            .iter()
            .filter_map(|subject| u8::try_from(subject.importance).ok())
            .collect()
    }
}
