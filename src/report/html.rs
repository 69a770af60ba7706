//! HTML pages for the form server: the input form and the result page.

use super::{drift_note, row_cells, COLUMNS};
use crate::types::schedule::ScheduleReport;
use crate::validate::ValidationIssue;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:60rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.3rem .6rem}\
.error{color:#a00}.success{color:#070}.bar{background:#4a7bd0;height:1rem}\
.chart td{border:none}";

/// Raw field values as typed into the form, kept as text so a rejected
/// submission can be shown back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectFields {
    pub name: String,
    pub marks: String,
    pub attendance: String,
    pub importance: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub student: String,
    pub total_hours: String,
    pub subjects: Vec<SubjectFields>,
    pub issues: Vec<ValidationIssue>,
}

impl FormState {
    pub fn blank(total_hours: f64, num_subjects: usize) -> Self {
        Self {
            student: String::new(),
            total_hours: total_hours.to_string(),
            subjects: (0..num_subjects)
                .map(|_| SubjectFields {
                    marks: "0".to_string(),
                    attendance: "0".to_string(),
                    importance: "1".to_string(),
                    ..SubjectFields::default()
                })
                .collect(),
            issues: Vec::new(),
        }
    }
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Study Schedule Generator</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<h1>Study Schedule Generator</h1>\n{body}</body>\n</html>\n"
    )
}

pub fn render_form(state: &FormState) -> String {
    let mut body = String::new();
    body.push_str(
        "<p>Generate your personalized study schedule based on your performance and preferences.</p>\n",
    );

    body.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n<label>Number of Subjects \
         <input type=\"number\" name=\"subjects\" min=\"1\" max=\"10\" value=\"{}\"></label>\n\
         <button type=\"submit\">Update</button>\n</form>\n",
        state.subjects.len()
    ));

    if !state.issues.is_empty() {
        body.push_str("<ul class=\"error\">\n");
        for issue in &state.issues {
            body.push_str(&format!("<li>{}</li>\n", escape(&issue.to_string())));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<form method=\"post\" action=\"/schedule\">\n");
    body.push_str(&format!(
        "<input type=\"hidden\" name=\"num_subjects\" value=\"{}\">\n",
        state.subjects.len()
    ));
    body.push_str(&format!(
        "<p><label>Student Name <input type=\"text\" name=\"student\" value=\"{}\"></label></p>\n",
        escape(&state.student)
    ));
    body.push_str(&format!(
        "<p><label>Total Available Study Hours <input type=\"number\" name=\"total_hours\" \
         min=\"1\" max=\"24\" step=\"0.1\" value=\"{}\"></label></p>\n",
        escape(&state.total_hours)
    ));

    body.push_str("<h2>Subject Details</h2>\n<table>\n<tr><th>Subject</th><th>Current Marks</th>\
                   <th>Attendance %</th><th>Importance (1-10)</th></tr>\n");
    for (i, subject) in state.subjects.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td><input type=\"text\" name=\"subject_{i}\" placeholder=\"Subject {n}\" value=\"{name}\"></td>\
             <td><input type=\"number\" name=\"marks_{i}\" min=\"0\" max=\"100\" step=\"0.1\" value=\"{marks}\"></td>\
             <td><input type=\"number\" name=\"attendance_{i}\" min=\"0\" max=\"100\" step=\"0.1\" value=\"{attendance}\"></td>\
             <td><input type=\"number\" name=\"importance_{i}\" min=\"1\" max=\"10\" step=\"1\" value=\"{importance}\"></td></tr>\n",
            n = i + 1,
            name = escape(&subject.name),
            marks = escape(&subject.marks),
            attendance = escape(&subject.attendance),
            importance = escape(&subject.importance),
        ));
    }
    body.push_str("</table>\n<p><button type=\"submit\">Generate Schedule</button></p>\n</form>\n");

    page(&body)
}

pub fn render_result(report: &ScheduleReport) -> String {
    let mut body = String::new();
    body.push_str("<p class=\"success\">Schedule generated successfully!</p>\n");
    body.push_str("<h2>Schedule Overview</h2>\n<p>");
    if let Some(student) = &report.student {
        body.push_str(&format!("Student: {}<br>", escape(student)));
    }
    body.push_str(&format!(
        "Total Study Hours: {} hours</p>\n",
        report.total_hours
    ));

    body.push_str("<table>\n<tr>");
    for column in COLUMNS {
        body.push_str(&format!("<th>{column}</th>"));
    }
    body.push_str("</tr>\n");
    for row in &report.rows {
        body.push_str("<tr>");
        for cell in row_cells(row) {
            body.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>\n");

    if let Some(note) = drift_note(report) {
        body.push_str(&format!("<p><em>{}</em></p>\n", escape(&note)));
    }

    body.push_str("<h2>Time Distribution</h2>\n<table class=\"chart\">\n");
    let max_hours = report.max_hours();
    for row in &report.rows {
        let percent = if max_hours > 0.0 {
            row.recommended_hours / max_hours * 100.0
        } else {
            0.0
        };
        body.push_str(&format!(
            "<tr><td>{}</td><td style=\"width:30rem\"><div class=\"bar\" style=\"width:{percent:.1}%\"></div></td><td>{:.1}</td></tr>\n",
            escape(&row.subject),
            row.recommended_hours
        ));
    }
    body.push_str("</table>\n<p><a href=\"/\">Plan another schedule</a></p>\n");

    page(&body)
}

pub fn render_error(message: &str) -> String {
    page(&format!(
        "<p class=\"error\">An error occurred: {}</p>\n\
         <p class=\"error\">Please ensure all fields are filled correctly.</p>\n\
         <p><a href=\"/\">Back to the form</a></p>\n",
        escape(message)
    ))
}
