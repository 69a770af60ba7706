use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::error::PlannerError;
use crate::planner;
use crate::report::html::{self, FormState, SubjectFields};
use crate::types::config::PlannerConfig;
use crate::types::request::{ScheduleRequest, SubjectRecord};
use crate::types::schedule::ScheduleReport;
use crate::validate::{ValidationIssue, SUBJECT_COUNT_RANGE};

#[derive(Clone)]
pub struct AppState {
    config: Arc<PlannerConfig>,
}

impl AppState {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<ValidationIssue>,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String, Vec<ValidationIssue>),
    Internal(String),
}

impl From<PlannerError> for ApiError {
    fn from(value: PlannerError) -> Self {
        match value {
            PlannerError::Validation(err) => {
                ApiError::Invalid("invalid request".to_string(), err.issues)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message, issues) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                    issues,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                    issues: Vec::new(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct FormQuery {
    subjects: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/health", get(health))
        .route("/schedule", post(submit_form))
        .route("/api/schedule", post(api_schedule))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, config: PlannerConfig) -> std::io::Result<()> {
    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("study planner listening on http://{addr}");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn show_form(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> Html<String> {
    let count = clamp_subject_count(
        query
            .subjects
            .unwrap_or_else(|| state.config.default_num_subjects()),
    );
    Html(html::render_form(&FormState::blank(
        state.config.default_total_hours(),
        count,
    )))
}

async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, Html<String>) {
    let (mut form, parsed) = read_form(&fields, state.config.default_num_subjects());
    let request = match parsed {
        Ok(request) => request,
        Err(issues) => {
            warn!(issues = issues.len(), "form submission has unreadable fields");
            form.issues = issues;
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html::render_form(&form)));
        }
    };

    match planner::generate(&request) {
        Ok(report) => (StatusCode::OK, Html(html::render_result(&report))),
        Err(PlannerError::Validation(err)) => {
            warn!(issues = err.issues.len(), "form submission rejected");
            form.issues = err.issues;
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html::render_form(&form)))
        }
        Err(err) => {
            error!(error = %err, "schedule computation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(html::render_error(&err.to_string())),
            )
        }
    }
}

async fn api_schedule(
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleReport>, ApiError> {
    let report = planner::generate(&request).map_err(|err| {
        match &err {
            PlannerError::Validation(_) => warn!(error = %err, "api request rejected"),
            _ => error!(error = %err, "schedule computation failed"),
        }
        ApiError::from(err)
    })?;
    Ok(Json(report))
}

fn clamp_subject_count(count: usize) -> usize {
    count.clamp(*SUBJECT_COUNT_RANGE.start(), *SUBJECT_COUNT_RANGE.end())
}

/// Reads the urlencoded form into the text view and, when every number parses,
/// a request. Range checks are left to validation.
fn read_form(
    fields: &HashMap<String, String>,
    default_count: usize,
) -> (FormState, Result<ScheduleRequest, Vec<ValidationIssue>>) {
    let field = |key: &str| {
        fields
            .get(key)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };
    let count = clamp_subject_count(field("num_subjects").parse().unwrap_or(default_count));

    let form = FormState {
        student: field("student"),
        total_hours: field("total_hours"),
        subjects: (0..count)
            .map(|i| SubjectFields {
                name: field(&format!("subject_{i}")),
                marks: field(&format!("marks_{i}")),
                attendance: field(&format!("attendance_{i}")),
                importance: field(&format!("importance_{i}")),
            })
            .collect(),
        issues: Vec::new(),
    };

    let mut issues = Vec::new();
    let total_hours = parse_number::<f64>(&mut issues, "total_hours", &form.total_hours);
    let mut subjects = Vec::with_capacity(count);
    for (i, row) in form.subjects.iter().enumerate() {
        let marks = parse_number::<f64>(&mut issues, &format!("subjects[{i}].marks"), &row.marks);
        let attendance = parse_number::<f64>(
            &mut issues,
            &format!("subjects[{i}].attendance"),
            &row.attendance,
        );
        let importance = parse_number::<i64>(
            &mut issues,
            &format!("subjects[{i}].importance"),
            &row.importance,
        );
        if let (Some(marks), Some(attendance), Some(importance)) = (marks, attendance, importance)
        {
            subjects.push(SubjectRecord::new(
                row.name.clone(),
                marks,
                attendance,
                importance,
            ));
        }
    }

    let parsed = match total_hours {
        Some(total_hours) if issues.is_empty() => {
            Ok(ScheduleRequest::new(total_hours, subjects).with_student(form.student.clone()))
        }
        _ => Err(issues),
    };
    (form, parsed)
}

fn parse_number<T: std::str::FromStr>(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    raw: &str,
) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            issues.push(ValidationIssue::new(
                field,
                format!("'{raw}' is not a valid number"),
            ));
            None
        }
    }
}
