//! Text rendering of record lists.

use crate::models::{CodingGoal, CodingSession};
use crate::utils::table::Table;

pub fn sessions_table(sessions: &[CodingSession]) -> String {
    let mut table = Table::new(["Id", "StartTime", "EndTime", "Duration"]);
    for s in sessions {
        table.add_row(vec![
            s.id.to_string(),
            s.start_str(),
            s.end_str(),
            s.duration_str(),
        ]);
    }
    table.render()
}

pub fn goals_table(goals: &[CodingGoal]) -> String {
    let mut table = Table::new(["Id", "Month", "Year", "Goal Hours"]);
    for g in goals {
        table.add_row(vec![
            g.id.to_string(),
            g.goal_month.clone(),
            g.goal_year.to_string(),
            g.goal_hours.to_string(),
        ]);
    }
    table.render()
}
