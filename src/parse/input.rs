use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::task::{Priority, TaskField};

/// A single line of user input that does not fit the expected grammar.
///
/// The display text is the message shown before the prompt repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("The input action is invalid")]
    InvalidAction,
    #[error("The input priority is invalid")]
    InvalidPriority,
    #[error("The input date is invalid")]
    InvalidDate,
    #[error("The input time is invalid")]
    InvalidTime,
    #[error("Invalid task number")]
    InvalidTaskNumber,
    #[error("Invalid field")]
    InvalidField,
}

/// Top-level commands read at the action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Add,
        Action::Print,
        Action::Edit,
        Action::Delete,
        Action::End,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Print => "print",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::End => "end",
        }
    }
}

/// Surrounding whitespace and case are ignored.
pub fn parse_action(input: &str) -> Result<Action, InputError> {
    let word = input.trim().to_ascii_lowercase();
    Action::ALL
        .into_iter()
        .find(|a| a.keyword() == word)
        .ok_or(InputError::InvalidAction)
}

/// Exactly one letter out of C, H, N, L, any case.
pub fn parse_priority(input: &str) -> Result<Priority, InputError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Priority::from_code(c).ok_or(InputError::InvalidPriority),
        _ => Err(InputError::InvalidPriority),
    }
}

/// `year-month-day`; month and day need no leading zero (`2022-1-3`).
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(InputError::InvalidDate);
    };
    let year: i32 = year.parse().map_err(|_| InputError::InvalidDate)?;
    let month: u32 = month.parse().map_err(|_| InputError::InvalidDate)?;
    let day: u32 = day.parse().map_err(|_| InputError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(InputError::InvalidDate)
}

/// `hour:minute`, 24-hour clock.
pub fn parse_time(input: &str) -> Result<NaiveTime, InputError> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(InputError::InvalidTime);
    };
    let hour: u32 = hour.parse().map_err(|_| InputError::InvalidTime)?;
    let minute: u32 = minute.parse().map_err(|_| InputError::InvalidTime)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(InputError::InvalidTime)
}

/// Join a validated date and time into the stored timestamp.
pub fn combine_date_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// A 1-based task number in `1..=count`, returned as a 0-based index.
pub fn parse_task_number(input: &str, count: usize) -> Result<usize, InputError> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidTaskNumber)?;
    if (1..=count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(InputError::InvalidTaskNumber)
    }
}

pub fn parse_field(input: &str) -> Result<TaskField, InputError> {
    let word = input.trim();
    TaskField::ALL
        .into_iter()
        .find(|f| f.keyword() == word)
        .ok_or(InputError::InvalidField)
}

/// A body line, or `None` for the blank line that ends body entry.
pub fn parse_body_line(input: &str) -> Option<String> {
    let line = input.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
