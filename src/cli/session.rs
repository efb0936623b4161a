use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::console::Console;
use crate::io::store_io::{self, StoreIoError};
use crate::model::config::{Config, DueClock};
use crate::model::store::{StoreError, TaskStore};
use crate::model::task::{Priority, Task, TaskField};
use crate::parse::{self, Action, InputError};
use crate::render::Renderer;

pub const MSG_NO_TASKS: &str = "No tasks have been input";
pub const MSG_CHANGED: &str = "The task is changed";
pub const MSG_DELETED: &str = "The task is deleted";
pub const MSG_EXITING: &str = "Tasklist exiting!";
pub const MSG_TOO_MANY_ATTEMPTS: &str = "Too many invalid attempts";

const DATE_PROMPT: &str = "Input the date (yyyy-mm-dd):";
const TIME_PROMPT: &str = "Input the time (hh:mm):";
const BODY_PROMPT: &str = "Input a new task (enter a blank line to end):";

/// Why a handler stopped before finishing
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,
    #[error("{}", MSG_TOO_MANY_ATTEMPTS)]
    TooManyAttempts,
    #[error("console error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Save(#[from] StoreIoError),
}

/// Source of "today" for due tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Today {
    Clock(DueClock),
    Fixed(NaiveDate),
}

impl Today {
    pub fn date(self) -> NaiveDate {
        match self {
            Today::Clock(clock) => clock.today(),
            Today::Fixed(date) => date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub renderer: Renderer,
    pub today: Today,
    /// 0 = keep asking forever
    pub max_attempts: u32,
    /// Where `end` saves the store; `None` keeps it in memory only
    pub save_to: Option<PathBuf>,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        SessionOptions {
            renderer: Renderer::from_config(&config.display),
            today: Today::Clock(config.display.due_clock),
            max_attempts: config.input.max_attempts,
            save_to: Some(config.storage.file.clone()),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            renderer: Renderer::default(),
            today: Today::Clock(DueClock::Utc),
            max_attempts: 0,
            save_to: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The read-eval-print loop: owns the store and is its only mutator.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: TaskStore,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, store: TaskStore, options: SessionOptions) -> Self {
        Session {
            console,
            store,
            options,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Run until `end` or end of input; both save and say goodbye.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let prompt = format!(
            "Input an action ({}):",
            join_keywords(Action::ALL.iter().map(|a| a.keyword()))
        );
        loop {
            self.console.say(&prompt)?;
            let Some(line) = self.console.read_line()? else {
                break;
            };
            let action = match parse::parse_action(&line) {
                Ok(action) => action,
                Err(e) => {
                    self.console.say(e)?;
                    continue;
                }
            };
            match self.dispatch(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(SessionError::TooManyAttempts) => self.console.say(MSG_TOO_MANY_ATTEMPTS)?,
                Err(SessionError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }
        self.end().map(|_| ())
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow, SessionError> {
        match action {
            Action::Add => self.add().map(|_| Flow::Continue),
            Action::Print => self.print().map(|_| Flow::Continue),
            Action::Edit => self.edit().map(|_| Flow::Continue),
            Action::Delete => self.delete().map(|_| Flow::Continue),
            Action::End => self.end(),
        }
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    fn add(&mut self) -> Result<(), SessionError> {
        let priority = self.ask_priority()?;
        let date = self.ask(DATE_PROMPT, parse::parse_date)?;
        let time = self.ask(TIME_PROMPT, parse::parse_time)?;
        let lines = self.ask_body()?;

        let task = Task::new(priority, parse::combine_date_time(date, time), lines);
        match self.store.append(task) {
            Ok(()) => Ok(()),
            Err(e @ StoreError::BlankTask) => Ok(self.console.say(e)?),
            Err(e) => Err(e.into()),
        }
    }

    /// Prints the store. Returns false when there was nothing to print.
    fn print(&mut self) -> Result<bool, SessionError> {
        if self.store.is_empty() {
            self.console.say(MSG_NO_TASKS)?;
            return Ok(false);
        }
        let today = self.options.today.date();
        let text = self.options.renderer.render(self.store.as_slice(), today);
        self.console.write_block(&text)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<(), SessionError> {
        if !self.print()? {
            return Ok(());
        }
        let index = self.ask_task_number()?;
        let prompt = format!(
            "Input a field to edit ({}):",
            join_keywords(TaskField::ALL.iter().map(|f| f.keyword()))
        );
        let field = self.ask(&prompt, parse::parse_field)?;

        let old = self
            .store
            .get(index)
            .cloned()
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;
        let new = match field {
            TaskField::Priority => old.with_priority(self.ask_priority()?),
            TaskField::Date => old.with_date(self.ask(DATE_PROMPT, parse::parse_date)?),
            TaskField::Time => old.with_time(self.ask(TIME_PROMPT, parse::parse_time)?),
            TaskField::Body => old.with_lines(self.ask_body()?),
        };
        self.store.replace(index, new)?;
        self.console.say(MSG_CHANGED)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<(), SessionError> {
        if !self.print()? {
            return Ok(());
        }
        let index = self.ask_task_number()?;
        self.store.remove(index)?;
        self.console.say(MSG_DELETED)?;
        Ok(())
    }

    fn end(&mut self) -> Result<Flow, SessionError> {
        if let Some(path) = &self.options.save_to {
            store_io::save_tasks(path, &self.store)?;
        }
        self.console.say(MSG_EXITING)?;
        Ok(Flow::Exit)
    }

    // -----------------------------------------------------------------------
    // Prompts
    // -----------------------------------------------------------------------

    /// Ask until `parse` accepts a line, reporting each rejection.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        let mut failures = 0;
        loop {
            self.console.say(prompt)?;
            let line = self.console.read_line()?.ok_or(SessionError::InputClosed)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    self.console.say(e)?;
                    failures += 1;
                    if self.options.max_attempts != 0 && failures >= self.options.max_attempts {
                        return Err(SessionError::TooManyAttempts);
                    }
                }
            }
        }
    }

    fn ask_priority(&mut self) -> Result<Priority, SessionError> {
        let codes = Priority::ALL.map(|p| p.code().to_string());
        let prompt = format!(
            "Input the task priority ({}):",
            join_keywords(codes.iter().map(String::as_str))
        );
        self.ask(&prompt, parse::parse_priority)
    }

    /// 0-based index of a task picked by its 1-based number.
    fn ask_task_number(&mut self) -> Result<usize, SessionError> {
        let count = self.store.len();
        let prompt = format!("Input the task number (1-{count}):");
        self.ask(&prompt, |line| parse::parse_task_number(line, count))
    }

    /// Lines up to the first blank one. May be empty.
    fn ask_body(&mut self) -> Result<Vec<String>, SessionError> {
        self.console.say(BODY_PROMPT)?;
        let mut lines = Vec::new();
        loop {
            let line = self.console.read_line()?.ok_or(SessionError::InputClosed)?;
            match parse::parse_body_line(&line) {
                Some(line) => lines.push(line),
                None => return Ok(lines),
            }
        }
    }
}

fn join_keywords<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(", ")
}
