use crate::cli::commands::{parse_id, resolve_id};
use crate::cli::parser::GoalAction;
use crate::context::AppContext;
use crate::core::goal::{GoalEdit, GoalLogic};
use crate::core::validate::{validate_hours_input, validate_month_or_exit, validate_year_or_exit};
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::MonthName;
use crate::ui::chart::render_progress_chart;
use crate::ui::messages::{info, success, warning};
use crate::ui::render::goals_table;

fn parse_month_arg(raw: &str) -> AppResult<Option<MonthName>> {
    validate_month_or_exit(raw).into_result(AppError::InvalidMonth)
}

fn parse_year_arg(raw: &str) -> AppResult<Option<i32>> {
    validate_year_or_exit(raw).into_result(AppError::InvalidYear)
}

fn parse_hours_arg(raw: &str) -> AppResult<Option<i64>> {
    validate_hours_input(raw).into_result(AppError::InvalidHours)
}

fn optional<T>(
    raw: &Option<String>,
    parse: impl Fn(&str) -> AppResult<Option<T>>,
) -> AppResult<Option<Option<T>>> {
    match raw {
        None => Ok(Some(None)),
        Some(s) => Ok(parse(s)?.map(Some)),
    }
}

fn cancelled() -> AppResult<()> {
    info("Operation cancelled.");
    Ok(())
}

pub fn handle(action: &GoalAction, ctx: &AppContext) -> AppResult<()> {
    let pool = &ctx.pool;

    match action {
        GoalAction::List { json } => {
            let goals = pool.goals().get_all_records()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else if goals.is_empty() {
                info("No goals found.");
            } else {
                print!("{}", goals_table(&goals));
            }
        }

        GoalAction::Add { month, year, hours } => {
            let (Some(m), Some(y), Some(h)) = (
                parse_month_arg(month)?,
                parse_year_arg(year)?,
                parse_hours_arg(hours)?,
            ) else {
                return cancelled();
            };

            let goal = GoalLogic::build(m, y, h)?;
            let stored = GoalLogic::add(pool, &goal)?;
            success(format!(
                "Added goal #{}: {}h for {} {}.",
                stored.id, stored.goal_hours, stored.goal_month, stored.goal_year
            ));
        }

        GoalAction::Edit {
            id,
            month,
            year,
            hours,
        } => {
            let Some(id) = resolve_id(&pool.goals(), id)? else {
                return cancelled();
            };

            let (Some(m), Some(y), Some(h)) = (
                optional(month, parse_month_arg)?,
                optional(year, parse_year_arg)?,
                optional(hours, parse_hours_arg)?,
            ) else {
                return cancelled();
            };

            let edit = GoalEdit {
                month: m,
                year: y,
                hours: h,
            };
            if edit.is_empty() {
                warning("Nothing to edit: pass at least one of --month, --year, --hours.");
                return Ok(());
            }

            let updated = GoalLogic::edit(pool, id, &edit)?;
            success(format!(
                "Goal #{} updated: {}h for {} {}.",
                updated.id, updated.goal_hours, updated.goal_month, updated.goal_year
            ));
        }

        GoalAction::Del { id } => {
            let Some(id) = parse_id(id)? else {
                return cancelled();
            };

            match GoalLogic::delete(pool, id) {
                WriteOutcome::Applied => success(format!("Goal #{} has been deleted.", id)),
                WriteOutcome::NotFound => warning(format!("No goal with id {}: nothing deleted.", id)),
                WriteOutcome::Failed(e) => return Err(AppError::WriteFailed(e)),
            }
        }

        GoalAction::Progress { id } => {
            let Some(id) = resolve_id(&pool.goals(), id)? else {
                return cancelled();
            };

            let goal = GoalLogic::load(pool, id)?;
            let progress = GoalLogic::progress(pool, &goal)?;
            print!("{}", render_progress_chart(&progress, ctx.cfg.chart_width));
        }
    }

    Ok(())
}
