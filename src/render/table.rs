use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::task::Task;
use crate::render::palette::Palette;
use crate::util::unicode::{chunk_by_width, pad_to_width};

/// Visible cells in the task column
pub const TASK_WIDTH: usize = 44;

const DIVIDER: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
const HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
/// Shared columns left blank on continuation rows
const EMPTY: &str = "|    |            |       |   |   |";

/// Render tasks as a bordered table, numbered from 1.
pub fn render_table(tasks: &[Task], today: NaiveDate, palette: Palette) -> String {
    let mut out = String::new();
    push_line(&mut out, DIVIDER);
    push_line(&mut out, HEADER);
    push_line(&mut out, DIVIDER);
    for (i, task) in tasks.iter().enumerate() {
        render_task(&mut out, task, i + 1, today, palette);
        push_line(&mut out, DIVIDER);
    }
    out
}

fn render_task(out: &mut String, task: &Task, number: usize, today: NaiveDate, palette: Palette) {
    let date = task.date().format("%Y-%m-%d");
    let time = task.time().format("%H:%M");
    let priority = palette.priority_cell(task.priority());
    let due = palette.due_cell(task.due_tag(today));

    // A blank body still gets one row so the task's number stays visible.
    let empty_body = [String::new()];
    let lines = if task.is_blank() {
        &empty_body[..]
    } else {
        task.lines()
    };

    let mut first = true;
    for line in lines {
        for chunk in chunk_by_width(line, TASK_WIDTH) {
            let body = pad_to_width(chunk, TASK_WIDTH);
            if first {
                // From 100 on the number overflows its column and the row
                // grows by a cell; the rest of the row stays intact.
                let _ = writeln!(
                    out,
                    "| {number:<2} | {date} | {time} | {priority} | {due} |{body}|"
                );
                first = false;
            } else {
                let _ = writeln!(out, "{EMPTY}{body}|");
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    }

    fn task(priority: Priority, date: (i32, u32, u32), hm: (u32, u32), lines: &[&str]) -> Task {
        let when = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hm.0, hm.1, 0)
            .unwrap();
        Task::new(priority, when, lines.iter().map(|s| s.to_string()).collect())
    }

    fn rows(output: &str) -> Vec<&str> {
        output.lines().collect()
    }

    #[test]
    fn table_layout() {
        let tasks = vec![
            task(Priority::High, (2023, 5, 1), (9, 0), &["Buy milk"]),
            task(
                Priority::Critical,
                (2023, 4, 30),
                (17, 45),
                &["Finish the quarterly report and send it to the whole team", "Print a copy"],
            ),
            task(Priority::Low, (2023, 6, 12), (8, 5), &["Dentist"]),
        ];
        let output = render_table(&tasks, today(), Palette::Letters);
        assert_snapshot!(output.trim_end(), @r"
        +----+------------+-------+---+---+--------------------------------------------+
        | N  |    Date    | Time  | P | D |                   Task                     |
        +----+------------+-------+---+---+--------------------------------------------+
        | 1  | 2023-05-01 | 09:00 | H | T |Buy milk                                    |
        +----+------------+-------+---+---+--------------------------------------------+
        | 2  | 2023-04-30 | 17:45 | C | O |Finish the quarterly report and send it to t|
        |    |            |       |   |   |he whole team                               |
        |    |            |       |   |   |Print a copy                                |
        +----+------------+-------+---+---+--------------------------------------------+
        | 3  | 2023-06-12 | 08:05 | L | I |Dentist                                     |
        +----+------------+-------+---+---+--------------------------------------------+
        ");
    }

    #[test]
    fn line_of_exact_width_is_one_row() {
        let body = "x".repeat(TASK_WIDTH);
        let tasks = [task(Priority::Normal, (2023, 5, 2), (10, 0), &[body.as_str()])];
        let output = render_table(&tasks, today(), Palette::Letters);
        let rows = rows(&output);
        // divider, header, divider, one row, divider
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3], format!("| 1  | 2023-05-02 | 10:00 | N | I |{body}|"));
    }

    #[test]
    fn line_one_over_width_wraps_to_second_row() {
        let body = "y".repeat(TASK_WIDTH + 1);
        let tasks = [task(Priority::Normal, (2023, 5, 2), (10, 0), &[body.as_str()])];
        let output = render_table(&tasks, today(), Palette::Letters);
        let rows = rows(&output);
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[3],
            format!("| 1  | 2023-05-02 | 10:00 | N | I |{}|", "y".repeat(TASK_WIDTH))
        );
        assert_eq!(rows[4], format!("{EMPTY}y{}|", " ".repeat(TASK_WIDTH - 1)));
    }

    #[test]
    fn every_row_has_the_same_width() {
        let long = "b".repeat(100);
        let tasks = vec![
            task(Priority::High, (2023, 5, 1), (9, 0), &["a", long.as_str()]),
            task(Priority::Low, (2022, 1, 1), (0, 0), &["c"]),
        ];
        let output = render_table(&tasks, today(), Palette::Letters);
        for row in rows(&output) {
            assert_eq!(row.chars().count(), DIVIDER.len(), "{row}");
        }
    }

    #[test]
    fn three_digit_number_widens_only_its_first_row() {
        let long = "z".repeat(TASK_WIDTH + 1);
        let mut tasks = vec![task(Priority::Normal, (2023, 5, 2), (10, 0), &["x"]); 99];
        tasks.push(task(Priority::Normal, (2023, 5, 2), (10, 0), &[long.as_str()]));
        let output = render_table(&tasks, today(), Palette::Letters);
        let rows = rows(&output);

        let first = rows[rows.len() - 3];
        assert_eq!(
            first,
            format!("| 100 | 2023-05-02 | 10:00 | N | I |{}|", "z".repeat(TASK_WIDTH))
        );
        assert_eq!(first.chars().count(), DIVIDER.len() + 1);
        assert_eq!(rows[rows.len() - 2].chars().count(), DIVIDER.len());
    }

    #[test]
    fn blank_task_still_gets_a_row() {
        let tasks = [task(Priority::Low, (2023, 5, 1), (7, 30), &[])];
        let output = render_table(&tasks, today(), Palette::Letters);
        let rows = rows(&output);
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[3],
            format!("| 1  | 2023-05-01 | 07:30 | L | T |{}|", " ".repeat(TASK_WIDTH))
        );
    }

    #[test]
    fn swatches_replace_letters() {
        let tasks = [task(Priority::Critical, (2023, 4, 1), (9, 0), &["late"])];
        let output = render_table(&tasks, today(), Palette::Swatch);
        let row = rows(&output)[3].to_string();
        let expected = format!(
            "| 1  | 2023-04-01 | 09:00 | {} | {} |{}|",
            Palette::Swatch.priority_cell(Priority::Critical),
            Palette::Swatch.due_cell(crate::model::task::DueTag::Overdue),
            pad_to_width("late", TASK_WIDTH)
        );
        assert_eq!(row, expected);
    }

    #[test]
    fn empty_list_is_just_the_header() {
        let output = render_table(&[], today(), Palette::Letters);
        assert_eq!(rows(&output), vec![DIVIDER, HEADER, DIVIDER]);
    }
}
