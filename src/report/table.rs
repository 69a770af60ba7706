use super::{chart, drift_note, row_cells, RenderOptions, COLUMNS};
use crate::types::schedule::ScheduleReport;

pub fn to_table(report: &ScheduleReport, options: RenderOptions) -> String {
    let rows: Vec<[String; 5]> = report.rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|name| name.chars().count()).collect();
    for cells in &rows {
        for (ci, cell) in cells.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str("Schedule generated successfully!\n\n");
    if let Some(student) = &report.student {
        out.push_str(&format!("Student: {student}\n"));
    }
    out.push_str(&format!("Total Study Hours: {} hours\n\n", report.total_hours));

    out.push_str(&sep);
    out.push('\n');
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    out.push_str(&sep);
    out.push('\n');
    for cells in &rows {
        push_line(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out.push_str(&sep);
    out.push('\n');

    if let Some(note) = drift_note(report) {
        out.push_str(&note);
        out.push('\n');
    }

    if options.chart {
        out.push_str("\nTime Distribution\n\n");
        out.push_str(&chart::to_text_chart(report, options.chart_width));
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(width - cell.chars().count()));
        out.push_str(" |");
    }
    out.push('\n');
}
