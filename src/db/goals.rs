use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::CodingGoal;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params};

pub const GOALS_TABLE: &str = "GoalsTrackerTable";

const SELECT_COLUMNS: &str = "SELECT Id, GoalMonth, GoalYear, GoalHours FROM GoalsTrackerTable";

pub struct GoalStore<'c> {
    conn: &'c Connection,
}

pub fn map_goal(row: &Row) -> rusqlite::Result<CodingGoal> {
    // GoalHours is a TEXT column: accept both storage classes
    let goal_hours = match row.get::<_, Value>("GoalHours")? {
        Value::Integer(n) => n,
        Value::Text(s) => s.trim().parse::<i64>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(AppError::CorruptValue {
                    column: "GoalHours",
                    value: s.clone(),
                }),
            )
        })?,
        other => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                3,
                other.data_type(),
                Box::new(AppError::CorruptValue {
                    column: "GoalHours",
                    value: format!("{:?}", other),
                }),
            ));
        }
    };

    Ok(CodingGoal {
        id: row.get("Id")?,
        goal_month: row.get("GoalMonth")?,
        goal_year: row.get("GoalYear")?,
        goal_hours,
    })
}

impl<'c> GoalStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// `(GoalMonth, GoalYear)` → `"yyyy-MM"`, the key of the session month filter.
    ///
    /// Fails with [`AppError::InvalidMonth`] when the stored month name is not
    /// one of the twelve English names.
    pub fn get_formatted_month_key(goal: &CodingGoal) -> AppResult<String> {
        goal.month_key()
    }

    pub fn count(&self) -> AppResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM GoalsTrackerTable", [], |row| row.get(0))?;
        Ok(n)
    }
}

impl RecordStore for GoalStore<'_> {
    type Record = CodingGoal;
    const KIND: &'static str = "goal";

    fn get_all_records(&self) -> AppResult<Vec<CodingGoal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY Id ASC"))?;

        let rows = stmt.query_map([], map_goal)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<CodingGoal>> {
        let goal = self
            .conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE Id = ?1"), [id], map_goal)
            .optional()?;
        Ok(goal)
    }

    fn add(&self, goal: &CodingGoal) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO GoalsTrackerTable (GoalMonth, GoalYear, GoalHours)
             VALUES (?1, ?2, ?3)",
            params![goal.goal_month, goal.goal_year, goal.goal_hours.to_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, goal: &CodingGoal) -> WriteOutcome {
        WriteOutcome::from_affected(self.conn.execute(
            "UPDATE GoalsTrackerTable
             SET GoalMonth = ?1, GoalYear = ?2, GoalHours = ?3
             WHERE Id = ?4",
            params![
                goal.goal_month,
                goal.goal_year,
                goal.goal_hours.to_string(),
                goal.id
            ],
        ))
    }

    fn delete(&self, id: i64) -> WriteOutcome {
        WriteOutcome::from_affected(
            self.conn
                .execute("DELETE FROM GoalsTrackerTable WHERE Id = ?1", [id]),
        )
    }
}
