use crate::types::schedule::ScheduleReport;

const BAR: char = '#';

/// Bar length in characters; the largest allocation spans `width`.
pub fn bar_length(hours: f64, max_hours: f64, width: usize) -> usize {
    if max_hours <= 0.0 || hours <= 0.0 {
        return 0;
    }
    ((hours / max_hours) * width as f64).round() as usize
}

/// Horizontal bar chart of recommended hours, one line per subject.
pub fn to_text_chart(report: &ScheduleReport, width: usize) -> String {
    let label_width = report
        .rows
        .iter()
        .map(|row| row.subject.chars().count())
        .max()
        .unwrap_or(0);
    let max_hours = report.max_hours();

    let mut output = String::new();
    for row in &report.rows {
        let pad = label_width - row.subject.chars().count();
        let bar = BAR
            .to_string()
            .repeat(bar_length(row.recommended_hours, max_hours, width));
        output.push_str(&format!(
            "{}{} | {} {:.1}\n",
            row.subject,
            " ".repeat(pad),
            bar,
            row.recommended_hours
        ));
    }
    output
}
