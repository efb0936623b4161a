use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Task priority. Serialized by its upper-case name; the single-letter code
/// is accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[serde(alias = "C")]
    Critical,
    #[serde(alias = "H")]
    High,
    #[serde(alias = "N")]
    Normal,
    #[serde(alias = "L")]
    Low,
}

impl Priority {
    /// All priorities, most urgent first
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Normal,
        Priority::Low,
    ];

    /// The letter typed at the priority prompt
    pub fn code(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Normal => 'N',
            Priority::Low => 'L',
        }
    }

    /// Case-insensitive lookup by letter code
    pub fn from_code(c: char) -> Option<Priority> {
        match c.to_ascii_uppercase() {
            'C' => Some(Priority::Critical),
            'H' => Some(Priority::High),
            'N' => Some(Priority::Normal),
            'L' => Some(Priority::Low),
            _ => None,
        }
    }

    /// Swatch background color
    pub fn color(self) -> Color {
        match self {
            Priority::Critical => Color::Red,
            Priority::High => Color::Yellow,
            Priority::Normal => Color::Green,
            Priority::Low => Color::Blue,
        }
    }
}

/// How a task's date relates to today. Derived at render time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueTag {
    Today,
    InTime,
    Overdue,
}

impl DueTag {
    /// Compare calendar dates only; the time of day plays no part.
    pub fn between(due: NaiveDate, today: NaiveDate) -> DueTag {
        match due.cmp(&today) {
            std::cmp::Ordering::Equal => DueTag::Today,
            std::cmp::Ordering::Greater => DueTag::InTime,
            std::cmp::Ordering::Less => DueTag::Overdue,
        }
    }

    pub fn code(self) -> char {
        match self {
            DueTag::Today => 'T',
            DueTag::InTime => 'I',
            DueTag::Overdue => 'O',
        }
    }

    pub fn color(self) -> Color {
        match self {
            DueTag::Today => Color::Yellow,
            DueTag::InTime => Color::Green,
            DueTag::Overdue => Color::Red,
        }
    }
}

/// The fields that `edit` can replace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Priority,
    Date,
    Time,
    Body,
}

impl TaskField {
    pub const ALL: [TaskField; 4] = [
        TaskField::Priority,
        TaskField::Date,
        TaskField::Time,
        TaskField::Body,
    ];

    /// The word typed at the field prompt
    pub fn keyword(self) -> &'static str {
        match self {
            TaskField::Priority => "priority",
            TaskField::Date => "date",
            TaskField::Time => "time",
            TaskField::Body => "task",
        }
    }
}

/// A task is a value: edits build a replacement rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    priority: Priority,
    /// Local date and time, no zone
    #[serde(rename = "isoDateTime", with = "iso_date_time")]
    when: NaiveDateTime,
    /// Body lines in entry order
    #[serde(default)]
    lines: Vec<String>,
}

impl Task {
    pub fn new(priority: Priority, when: NaiveDateTime, lines: Vec<String>) -> Self {
        Task {
            priority,
            when,
            lines,
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn date(&self) -> NaiveDate {
        self.when.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.when.time()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A task without body lines; never accepted by `add`
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn due_tag(&self, today: NaiveDate) -> DueTag {
        DueTag::between(self.date(), today)
    }

    /// The stored timestamp string, e.g. `2023-05-01T09:00`
    pub fn iso_date_time(&self) -> String {
        iso_date_time::format(&self.when)
    }

    pub fn with_priority(&self, priority: Priority) -> Task {
        Task {
            priority,
            ..self.clone()
        }
    }

    /// Replace the date, keeping the time of day exactly.
    pub fn with_date(&self, date: NaiveDate) -> Task {
        Task {
            when: date.and_time(self.time()),
            ..self.clone()
        }
    }

    /// Replace the time of day, keeping the date.
    pub fn with_time(&self, time: NaiveTime) -> Task {
        Task {
            when: self.date().and_time(time),
            ..self.clone()
        }
    }

    pub fn with_lines(&self, lines: Vec<String>) -> Task {
        Task {
            lines,
            ..self.clone()
        }
    }
}

/// `YYYY-MM-DDThh:mm`, with seconds (and fraction) only when non-zero.
pub mod iso_date_time {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTES: &str = "%Y-%m-%dT%H:%M";
    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
    const FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn format(when: &NaiveDateTime) -> String {
        let fmt = if when.nanosecond() != 0 {
            FRACTION
        } else if when.second() != 0 {
            SECONDS
        } else {
            MINUTES
        };
        when.format(fmt).to_string()
    }

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, FRACTION)
            .or_else(|_| NaiveDateTime::parse_from_str(s, MINUTES))
            .ok()
    }

    pub fn serialize<S: Serializer>(when: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(when))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date-time {s:?}, expected YYYY-MM-DDThh:mm"))
        })
    }
}
