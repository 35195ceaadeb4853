//! Goal progress: hours coded in a goal's month against its target.

use crate::errors::AppResult;
use crate::models::{CodingGoal, CodingSession};
use crate::utils::time::round2;
use serde::Serialize;

pub const CURRENT_PROGRESS_LABEL: &str = "Current Progress";
pub const GOAL_HOURS_LABEL: &str = "Goal Hours";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_month: String,
    pub goal_year: i32,
    /// Rounded to 2 decimals.
    pub total_hours: f64,
    pub goal_hours: i64,
}

impl GoalProgress {
    /// The two chart items, raw values (no clamping when the goal is exceeded).
    pub fn series(&self) -> [(&'static str, f64); 2] {
        [
            (CURRENT_PROGRESS_LABEL, self.total_hours),
            (GOAL_HOURS_LABEL, self.goal_hours as f64),
        ]
    }

    pub fn is_reached(&self) -> bool {
        self.total_hours >= self.goal_hours as f64
    }

    pub fn remaining_hours(&self) -> f64 {
        round2((self.goal_hours as f64 - self.total_hours).max(0.0))
    }

    pub fn percent(&self) -> f64 {
        if self.goal_hours <= 0 {
            return 0.0;
        }
        round2(self.total_hours / self.goal_hours as f64 * 100.0)
    }
}

/// Sum the sessions that started in the goal's month.
///
/// `sessions` may be the full table or an already filtered list; anything
/// outside the goal's month is ignored. Only fails when the goal's month
/// name is not recognized.
pub fn calculate_progress(goal: &CodingGoal, sessions: &[CodingSession]) -> AppResult<GoalProgress> {
    let key = goal.month_key()?;

    let total: f64 = sessions
        .iter()
        .filter(|s| s.month_key() == key)
        .map(CodingSession::total_hours)
        .sum();

    Ok(GoalProgress {
        goal_month: goal.goal_month.clone(),
        goal_year: goal.goal_year,
        total_hours: round2(total),
        goal_hours: goal.goal_hours,
    })
}
