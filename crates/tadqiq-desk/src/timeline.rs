//! # Task Timeline Export
//!
//! Renders a task's transition log as the CSV file the details view
//! offers for download: UTF-8 with a BOM so spreadsheet applications
//! detect the Arabic headers, newest row first.

use tadqiq_core::PlanDate;
use tadqiq_state::AuditTask;

/// Byte-order mark prepended so Excel opens the Arabic text correctly.
const UTF8_BOM: &str = "\u{feff}";

/// CSV column headers, matching the on-screen timeline table.
const HEADERS: [&str; 3] = ["التاريخ والوقت", "الإجراء", "من قام بالإجراء"];

/// Render the task's timeline as CSV, newest row first.
pub fn timeline_csv(task: &AuditTask) -> String {
    let mut lines = Vec::with_capacity(task.transitions.len() + 1);
    lines.push(HEADERS.join(","));
    for record in task.transitions.iter().rev() {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\"",
            record.timestamp,
            csv_escape(&record.reason),
            csv_escape(&record.actor),
        ));
    }
    format!("{UTF8_BOM}{}", lines.join("\n"))
}

/// The download file name: `timeline_<task>_<date>.csv`.
pub fn timeline_filename(task: &AuditTask, date: PlanDate) -> String {
    format!("timeline_{}_{}.csv", task.id, date)
}

/// Double embedded quotes per RFC 4180.
fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

// ─── Tests ───────────────────────────────────────────────────────────
