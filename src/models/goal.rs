use super::entry::Entry;
use super::month::MonthName;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodingGoal {
    pub id: i64,
    pub goal_month: String, // ⇔ GoalsTrackerTable.GoalMonth (full English name)
    pub goal_year: i32,     // ⇔ GoalsTrackerTable.GoalYear
    pub goal_hours: i64,    // ⇔ GoalsTrackerTable.GoalHours (TEXT)
}

impl CodingGoal {
    pub fn new(goal_month: impl Into<String>, goal_year: i32, goal_hours: i64) -> Self {
        Self {
            id: 0,
            goal_month: goal_month.into(),
            goal_year,
            goal_hours,
        }
    }

    /// The row inserted when the goals table is created.
    pub fn seed_default() -> Self {
        Self::new("September", 2024, 1)
    }

    /// `"yyyy-MM"` key used to match sessions against this goal.
    ///
    /// The month name must be one of the twelve full English names, spelled
    /// exactly (case-sensitive).
    pub fn month_key(&self) -> AppResult<String> {
        let month = MonthName::from_exact(&self.goal_month)
            .ok_or_else(|| AppError::InvalidMonth(self.goal_month.clone()))?;
        Ok(format!("{:04}-{:02}", self.goal_year, month.number()))
    }
}

impl Entry for CodingGoal {
    fn id(&self) -> i64 {
        self.id
    }
}
