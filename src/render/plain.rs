use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::task::Task;

/// Body lines sit under the header, indented past the number column
const INDENT: &str = "   ";

/// One header line per task (`1  2023-05-01 09:00 H T`) followed by its
/// body lines. Priority and due tag are always letter codes here.
pub fn render_plain(tasks: &[Task], today: NaiveDate) -> String {
    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<2} {} {} {} {}",
            i + 1,
            task.date().format("%Y-%m-%d"),
            task.time().format("%H:%M"),
            task.priority().code(),
            task.due_tag(today).code()
        );
        for line in task.lines() {
            let _ = writeln!(out, "{INDENT}{line}");
        }
        out.push('\n');
    }
    out
}
