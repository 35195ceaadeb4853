//! Interactive, menu-driven mode.
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any
//! `Write`, so the whole flow can be driven from a script. Every prompt
//! loops on invalid input and gives up on the exit token or end of input.

use crate::context::AppContext;
use crate::core::goal::{GoalEdit, GoalLogic};
use crate::core::session::{SessionEdit, SessionLogic};
use crate::core::validate::{
    DATE_FORMATS, Validated, is_exit_token, validate_date_or_exit, validate_hours_input,
    validate_id, validate_month_or_exit, validate_time_or_exit, validate_year_or_exit,
};
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{CodingGoal, CodingSession};
use crate::ui::chart::render_progress_chart;
use crate::ui::messages::{Level, format_header, format_message};
use crate::ui::render::{goals_table, sessions_table};
use std::io::{BufRead, Write};

const MAIN_CHOICES: [&str; 2] = ["Coding sessions", "Goals"];
const SESSION_CHOICES: [&str; 4] = ["Add new", "Edit existing", "Delete a session", "View all sessions"];
const SESSION_EDIT_CHOICES: [&str; 4] = ["Edit start date", "Edit start time", "Edit end date", "Edit end time"];
const GOAL_CHOICES: [&str; 5] = [
    "Add new",
    "Edit existing",
    "Delete a goal",
    "View all goals",
    "View progress towards a goal",
];
const GOAL_EDIT_CHOICES: [&str; 3] = ["Month", "Year", "Hours"];

fn validate_choice(input: &str, count: usize) -> Validated<usize> {
    if is_exit_token(input) {
        return Validated::Exit;
    }
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Validated::Value(n - 1),
        _ => Validated::Invalid(format!("Please pick a number between 1 and {}.", count)),
    }
}

/// Session bound violations are re-prompted, anything else is fatal.
fn is_retryable(e: &AppError) -> bool {
    matches!(
        e,
        AppError::EndBeforeStart { .. } | AppError::SessionTooLong { .. } | AppError::InvalidHours(_)
    )
}

pub struct Menu<'a, R: BufRead, W: Write> {
    ctx: &'a AppContext,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ctx: &'a AppContext, input: R, out: W) -> Self {
        Self { ctx, input, out }
    }

    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", format_header("Welcome to Coding and Goals Tracker!"))?;

        while let Some(choice) = self.choose("What's your selection?", &MAIN_CHOICES)? {
            match choice {
                0 => self.sessions_menu()?,
                _ => self.goals_menu()?,
            }
        }

        writeln!(self.out, "Exited program")?;
        Ok(())
    }

    // ---------------------------
    // Prompt helpers
    // ---------------------------

    /// `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, level: Level, msg: impl std::fmt::Display) -> AppResult<()> {
        writeln!(self.out, "{}", format_message(level, msg))?;
        Ok(())
    }

    /// Ask until `validate` accepts the answer; `None` on exit or end of input.
    fn prompt<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> Validated<T>,
    ) -> AppResult<Option<T>> {
        loop {
            write!(self.out, "{} (or 'e' to exit): ", question)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match validate(&line) {
                Validated::Exit => return Ok(None),
                Validated::Value(v) => return Ok(Some(v)),
                Validated::Invalid(msg) => self.say(Level::Error, msg)?,
            }
        }
    }

    /// Numbered choice list; returns the 0-based index.
    fn choose(&mut self, title: &str, options: &[&str]) -> AppResult<Option<usize>> {
        writeln!(self.out, "\n{}", title)?;
        for (i, opt) in options.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, opt)?;
        }
        let count = options.len();
        self.prompt("Selection", |s| validate_choice(s, count))
    }

    /// Show the records and ask for one of their ids.
    fn select_id<S: RecordStore>(&mut self, store: &S, rendered: &str) -> AppResult<Option<i64>> {
        let known = store.known_ids()?;
        write!(self.out, "{}", rendered)?;
        if known.is_empty() {
            self.say(Level::Info, format!("There is no {} to pick.", S::KIND))?;
            return Ok(None);
        }
        self.prompt("Enter the record id", |s| validate_id(s, &known))
    }

    fn report_outcome(&mut self, outcome: WriteOutcome, done: &str) -> AppResult<()> {
        match outcome {
            WriteOutcome::Applied => self.say(Level::Success, done),
            WriteOutcome::NotFound => self.say(Level::Warning, "The record no longer exists."),
            WriteOutcome::Failed(e) => self.say(Level::Error, format!("Unable to save the change: {}", e)),
        }
    }

    // ---------------------------
    // Sessions
    // ---------------------------

    fn sessions_menu(&mut self) -> AppResult<()> {
        while let Some(choice) = self.choose("Coding sessions", &SESSION_CHOICES)? {
            match choice {
                0 => self.add_session()?,
                1 => self.edit_session()?,
                2 => self.delete_session()?,
                _ => {
                    let sessions = self.ctx.pool.sessions().get_all_records()?;
                    write!(self.out, "{}", sessions_table(&sessions))?;
                }
            }
        }
        Ok(())
    }

    fn prompt_session(&mut self) -> AppResult<Option<CodingSession>> {
        let max_hours = self.ctx.cfg.max_session_hours;
        loop {
            let Some(start_date) = self.prompt("Start date (YYYY-MM-DD)", |s| {
                validate_date_or_exit(s, &DATE_FORMATS)
            })?
            else {
                return Ok(None);
            };
            let Some(start_time) = self.prompt("Start time (HH:MM)", validate_time_or_exit)? else {
                return Ok(None);
            };
            let Some(end_date) = self.prompt("End date (YYYY-MM-DD)", |s| {
                validate_date_or_exit(s, &DATE_FORMATS)
            })?
            else {
                return Ok(None);
            };
            let Some(end_time) = self.prompt("End time (HH:MM)", validate_time_or_exit)? else {
                return Ok(None);
            };

            match SessionLogic::build(start_date, start_time, end_date, end_time, max_hours) {
                Ok(session) => return Ok(Some(session)),
                Err(e) if is_retryable(&e) => {
                    self.say(Level::Error, format!("{}. Please re-enter dates and times.", e))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn add_session(&mut self) -> AppResult<()> {
        if let Some(session) = self.prompt_session()? {
            let stored = SessionLogic::add(&self.ctx.pool, &session)?;
            self.say(
                Level::Success,
                format!(
                    "You have added a coding session lasting {} (id {}).",
                    stored.duration_str(),
                    stored.id
                ),
            )?;
        }
        Ok(())
    }

    fn edit_session(&mut self) -> AppResult<()> {
        let ctx = self.ctx;
        let store = ctx.pool.sessions();
        let rendered = sessions_table(&store.get_all_records()?);
        let Some(id) = self.select_id(&store, &rendered)? else {
            return Ok(());
        };
        let Some(current) = store.get_by_id(id)? else {
            return self.report_outcome(WriteOutcome::NotFound, "");
        };

        let max_hours = ctx.cfg.max_session_hours;
        loop {
            let Some(choice) = self.choose("What do you want to edit?", &SESSION_EDIT_CHOICES)? else {
                return Ok(());
            };

            let mut edit = SessionEdit::default();
            let answered = match choice {
                0 | 2 => {
                    let d = self.prompt("New date (YYYY-MM-DD)", |s| {
                        validate_date_or_exit(s, &DATE_FORMATS)
                    })?;
                    if choice == 0 {
                        edit.start_date = d;
                    } else {
                        edit.end_date = d;
                    }
                    d.is_some()
                }
                _ => {
                    let t = self.prompt("New time (HH:MM)", validate_time_or_exit)?;
                    if choice == 1 {
                        edit.start_time = t;
                    } else {
                        edit.end_time = t;
                    }
                    t.is_some()
                }
            };
            if !answered {
                return Ok(());
            }

            match SessionLogic::apply_edit(&current, &edit, max_hours) {
                Ok(updated) => {
                    let outcome = match SessionLogic::save(&ctx.pool, &updated) {
                        Ok(()) => WriteOutcome::Applied,
                        Err(AppError::NotFound { .. }) => WriteOutcome::NotFound,
                        Err(e) => WriteOutcome::Failed(e.to_string()),
                    };
                    return self.report_outcome(outcome, "Record updated.");
                }
                Err(e) if is_retryable(&e) => {
                    self.say(Level::Error, format!("Invalid edit: {}. Please try again.", e))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn delete_session(&mut self) -> AppResult<()> {
        let ctx = self.ctx;
        let store = ctx.pool.sessions();
        let rendered = sessions_table(&store.get_all_records()?);
        if let Some(id) = self.select_id(&store, &rendered)? {
            let outcome = SessionLogic::delete(&ctx.pool, id);
            self.report_outcome(outcome, "Record deleted successfully.")?;
        }
        Ok(())
    }

    // ---------------------------
    // Goals
    // ---------------------------

    fn goals_menu(&mut self) -> AppResult<()> {
        while let Some(choice) = self.choose("Goals", &GOAL_CHOICES)? {
            match choice {
                0 => self.add_goal()?,
                1 => self.edit_goal()?,
                2 => self.delete_goal()?,
                3 => {
                    let goals = self.ctx.pool.goals().get_all_records()?;
                    write!(self.out, "{}", goals_table(&goals))?;
                }
                _ => self.show_progress()?,
            }
        }
        Ok(())
    }

    fn add_goal(&mut self) -> AppResult<()> {
        let Some(month) = self.prompt("Goal month (e.g. September)", validate_month_or_exit)? else {
            return Ok(());
        };
        let Some(year) = self.prompt("Goal year", validate_year_or_exit)? else {
            return Ok(());
        };
        let Some(hours) = self.prompt("Number of hours for your goal", validate_hours_input)? else {
            return Ok(());
        };

        let goal = GoalLogic::build(month, year, hours)?;
        let stored = GoalLogic::add(&self.ctx.pool, &goal)?;
        self.say(
            Level::Success,
            format!(
                "You have added a coding goal of {}h for {} {} (id {}).",
                stored.goal_hours, stored.goal_month, stored.goal_year, stored.id
            ),
        )
    }

    fn pick_goal(&mut self) -> AppResult<Option<CodingGoal>> {
        let ctx = self.ctx;
        let store = ctx.pool.goals();
        let rendered = goals_table(&store.get_all_records()?);
        match self.select_id(&store, &rendered)? {
            Some(id) => store.get_by_id(id),
            None => Ok(None),
        }
    }

    fn edit_goal(&mut self) -> AppResult<()> {
        let Some(goal) = self.pick_goal()? else {
            return Ok(());
        };
        let Some(choice) = self.choose("What do you want to edit?", &GOAL_EDIT_CHOICES)? else {
            return Ok(());
        };

        let mut edit = GoalEdit::default();
        match choice {
            0 => edit.month = self.prompt("New month", validate_month_or_exit)?,
            1 => edit.year = self.prompt("New year", validate_year_or_exit)?,
            _ => edit.hours = self.prompt("New number of hours", validate_hours_input)?,
        }
        if edit.is_empty() {
            return Ok(());
        }

        let updated = GoalLogic::apply_edit(&goal, &edit)?;
        let outcome = match GoalLogic::save(&self.ctx.pool, &updated) {
            Ok(()) => WriteOutcome::Applied,
            Err(AppError::NotFound { .. }) => WriteOutcome::NotFound,
            Err(e) => WriteOutcome::Failed(e.to_string()),
        };
        self.report_outcome(outcome, "Record updated.")
    }

    fn delete_goal(&mut self) -> AppResult<()> {
        let ctx = self.ctx;
        let store = ctx.pool.goals();
        let rendered = goals_table(&store.get_all_records()?);
        if let Some(id) = self.select_id(&store, &rendered)? {
            let outcome = GoalLogic::delete(&ctx.pool, id);
            self.report_outcome(outcome, "Record deleted successfully.")?;
        }
        Ok(())
    }

    fn show_progress(&mut self) -> AppResult<()> {
        let Some(goal) = self.pick_goal()? else {
            return Ok(());
        };

        match GoalLogic::progress(&self.ctx.pool, &goal) {
            Ok(progress) => {
                let chart = render_progress_chart(&progress, self.ctx.cfg.chart_width);
                write!(self.out, "{}", chart)?;
                Ok(())
            }
            Err(e @ AppError::InvalidMonth(_)) => self.say(Level::Error, e),
            Err(e) => Err(e),
        }
    }
}
