pub mod palette;
pub mod plain;
pub mod table;

pub use palette::Palette;
pub use plain::render_plain;
pub use table::render_table;

use chrono::NaiveDate;

use crate::model::config::{DisplayConfig, RenderStyle};
use crate::model::task::Task;

/// Formats the task list for `print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub style: RenderStyle,
    pub palette: Palette,
}

impl Renderer {
    pub fn new(style: RenderStyle, palette: Palette) -> Self {
        Renderer { style, palette }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Renderer::new(display.style, Palette::from_color_flag(display.color))
    }

    /// Due tags are computed against `today`, so the same task can render
    /// differently on a later day.
    pub fn render(&self, tasks: &[Task], today: NaiveDate) -> String {
        match self.style {
            RenderStyle::Table => render_table(tasks, today, self.palette),
            RenderStyle::Plain => render_plain(tasks, today),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(RenderStyle::Table, Palette::Swatch)
    }
}
