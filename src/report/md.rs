use super::{chart, drift_note, row_cells, RenderOptions, COLUMNS};
use crate::types::schedule::ScheduleReport;

pub fn to_markdown(report: &ScheduleReport, options: RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("# Study Schedule\n\n");
    output.push_str("## Schedule Overview\n\n");
    if let Some(student) = &report.student {
        output.push_str(&format!("- Student: {}\n", escape_cell(student)));
    }
    output.push_str(&format!(
        "- Total Study Hours: {} hours\n\n",
        report.total_hours
    ));

    output.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    output.push_str("| --- | ---: | ---: | ---: | ---: |\n");
    for row in &report.rows {
        let cells = row_cells(row).map(|cell| escape_cell(&cell));
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    output.push('\n');

    if let Some(note) = drift_note(report) {
        output.push_str(&format!("_{note}_\n\n"));
    }

    if options.chart {
        output.push_str("## Time Distribution\n\n```text\n");
        output.push_str(&chart::to_text_chart(report, options.chart_width));
        output.push_str("```\n");
    }

    output
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
