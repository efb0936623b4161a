use crossterm::style::{Color, Stylize};

use crate::model::task::{DueTag, Priority};

/// How the one-cell priority and due columns are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// A single space on the variant's background color
    Swatch,
    /// The variant's letter code, no escape sequences
    Letters,
}

impl Palette {
    pub fn from_color_flag(color: bool) -> Self {
        if color { Palette::Swatch } else { Palette::Letters }
    }

    pub fn priority_cell(self, priority: Priority) -> String {
        match self {
            Palette::Swatch => swatch(priority.color()),
            Palette::Letters => priority.code().to_string(),
        }
    }

    pub fn due_cell(self, due: DueTag) -> String {
        match self {
            Palette::Swatch => swatch(due.color()),
            Palette::Letters => due.code().to_string(),
        }
    }
}

fn swatch(color: Color) -> String {
    " ".on(color).to_string()
}
