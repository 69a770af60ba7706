use crate::error::{PlannerError, Result};
use crate::types::request::{ScheduleRequest, SubjectRecord};
use std::path::Path;

/// Reads a request file. `.json` files are parsed as JSON, everything else as TOML.
pub fn load_request(path: &Path) -> Result<ScheduleRequest> {
    if !path.exists() {
        return Err(PlannerError::RequestNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| PlannerError::RequestParse(format!("{}: {}", path.display(), e)))
    } else {
        toml::from_str(&content)
            .map_err(|e| PlannerError::RequestParse(format!("{}: {}", path.display(), e)))
    }
}

/// Parses `NAME:MARKS:ATTENDANCE:IMPORTANCE`. The name may itself contain `:`.
pub fn parse_subject_spec(raw: &str) -> std::result::Result<SubjectRecord, String> {
    let mut parts = raw.rsplitn(4, ':');
    let importance = parts.next();
    let attendance = parts.next();
    let marks = parts.next();
    let name = parts.next();

    let (Some(name), Some(marks), Some(attendance), Some(importance)) =
        (name, marks, attendance, importance)
    else {
        return Err(format!(
            "expected NAME:MARKS:ATTENDANCE:IMPORTANCE, got '{raw}'"
        ));
    };

    let marks: f64 = marks
        .trim()
        .parse()
        .map_err(|_| format!("marks must be a number, got '{marks}'"))?;
    let attendance: f64 = attendance
        .trim()
        .parse()
        .map_err(|_| format!("attendance must be a number, got '{attendance}'"))?;
    let importance: i64 = importance
        .trim()
        .parse()
        .map_err(|_| format!("importance must be a whole number, got '{importance}'"))?;

    Ok(SubjectRecord::new(name.trim(), marks, attendance, importance))
}
