use crate::core::progress::{GoalProgress, calculate_progress};
use crate::core::records::{add_entry, delete_entry, update_entry};
use crate::core::validate::{Validated, validate_hours};
use crate::db::pool::DbPool;
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{CodingGoal, MonthName};

/// Components of a goal edit; `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoalEdit {
    pub month: Option<MonthName>,
    pub year: Option<i32>,
    pub hours: Option<i64>,
}

impl GoalEdit {
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.year.is_none() && self.hours.is_none()
    }
}

fn checked_hours(hours: i64) -> AppResult<i64> {
    match validate_hours(hours) {
        Validated::Value(h) => Ok(h),
        Validated::Invalid(msg) => Err(AppError::InvalidHours(msg)),
        Validated::Exit => Err(AppError::InvalidHours(hours.to_string())),
    }
}

/// High-level business logic for monthly goals.
pub struct GoalLogic;

impl GoalLogic {
    pub fn build(month: MonthName, year: i32, hours: i64) -> AppResult<CodingGoal> {
        Ok(CodingGoal::new(month.name(), year, checked_hours(hours)?))
    }

    pub fn apply_edit(goal: &CodingGoal, edit: &GoalEdit) -> AppResult<CodingGoal> {
        let mut updated = goal.clone();
        if let Some(m) = edit.month {
            updated.goal_month = m.name().to_string();
        }
        if let Some(y) = edit.year {
            updated.goal_year = y;
        }
        if let Some(h) = edit.hours {
            updated.goal_hours = checked_hours(h)?;
        }
        Ok(updated)
    }

    pub fn add(pool: &DbPool, goal: &CodingGoal) -> AppResult<CodingGoal> {
        let message = format!(
            "Added goal of {}h for {} {}",
            goal.goal_hours, goal.goal_month, goal.goal_year
        );
        let id = add_entry(&pool.conn, &pool.goals(), goal, &message)?;

        let mut stored = goal.clone();
        stored.id = id;
        Ok(stored)
    }

    pub fn edit(pool: &DbPool, id: i64, edit: &GoalEdit) -> AppResult<CodingGoal> {
        let updated = Self::apply_edit(&Self::load(pool, id)?, edit)?;
        Self::save(pool, &updated)?;
        Ok(updated)
    }

    pub fn save(pool: &DbPool, goal: &CodingGoal) -> AppResult<()> {
        let message = format!(
            "Goal now {}h for {} {}",
            goal.goal_hours, goal.goal_month, goal.goal_year
        );
        match update_entry(&pool.conn, &pool.goals(), goal, &message) {
            WriteOutcome::Applied => Ok(()),
            WriteOutcome::NotFound => Err(AppError::NotFound {
                kind: "goal",
                id: goal.id,
            }),
            WriteOutcome::Failed(e) => Err(AppError::WriteFailed(e)),
        }
    }

    pub fn delete(pool: &DbPool, id: i64) -> WriteOutcome {
        delete_entry(&pool.conn, &pool.goals(), id)
    }

    pub fn load(pool: &DbPool, id: i64) -> AppResult<CodingGoal> {
        pool.goals()
            .get_by_id(id)?
            .ok_or(AppError::NotFound { kind: "goal", id })
    }

    /// Progress of a stored goal, using the sessions of its month.
    pub fn progress(pool: &DbPool, goal: &CodingGoal) -> AppResult<GoalProgress> {
        let key = goal.month_key()?;
        let sessions = pool.sessions().get_sessions_for_month(&key)?;
        calculate_progress(goal, &sessions)
    }
}
