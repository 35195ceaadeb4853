use crate::cli::commands::{parse_id, resolve_id};
use crate::cli::parser::SessionAction;
use crate::context::AppContext;
use crate::core::session::{SessionEdit, SessionLogic};
use crate::core::validate::{DATE_FORMATS, validate_date_or_exit, validate_time_or_exit};
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::render::sessions_table;
use crate::utils::date::parse_month_key;
use chrono::{NaiveDate, NaiveTime};

fn parse_date_arg(raw: &str) -> AppResult<Option<NaiveDate>> {
    validate_date_or_exit(raw, &DATE_FORMATS).into_result(AppError::InvalidDate)
}

fn parse_time_arg(raw: &str) -> AppResult<Option<NaiveTime>> {
    validate_time_or_exit(raw).into_result(AppError::InvalidTime)
}

/// Optional argument: absent stays `Some(None)`, exit token gives `None`.
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

pub fn handle(action: &SessionAction, ctx: &AppContext) -> AppResult<()> {
    let pool = &ctx.pool;
    let max_hours = ctx.cfg.max_session_hours;

    match action {
        SessionAction::List { month, json } => {
            let sessions = match month {
                Some(key) => {
                    parse_month_key(key).ok_or_else(|| AppError::InvalidDate(key.clone()))?;
                    pool.sessions().get_sessions_for_month(key.trim())?
                }
                None => pool.sessions().get_all_records()?,
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                info("No coding sessions found.");
            } else {
                print!("{}", sessions_table(&sessions));
            }
        }

        SessionAction::Add {
            start_date,
            start_time,
            end_date,
            end_time,
        } => {
            let (Some(sd), Some(st), Some(ed), Some(et)) = (
                parse_date_arg(start_date)?,
                parse_time_arg(start_time)?,
                parse_date_arg(end_date)?,
                parse_time_arg(end_time)?,
            ) else {
                return cancelled();
            };

            let session = SessionLogic::build(sd, st, ed, et, max_hours)?;
            let stored = SessionLogic::add(pool, &session)?;
            success(format!(
                "Added coding session #{} lasting {} ({} → {}).",
                stored.id,
                stored.duration_str(),
                stored.start_str(),
                stored.end_str()
            ));
        }

        SessionAction::Edit {
            id,
            start_date,
            start_time,
            end_date,
            end_time,
        } => {
            let Some(id) = resolve_id(&pool.sessions(), id)? else {
                return cancelled();
            };

            let (Some(sd), Some(st), Some(ed), Some(et)) = (
                optional(start_date, parse_date_arg)?,
                optional(start_time, parse_time_arg)?,
                optional(end_date, parse_date_arg)?,
                optional(end_time, parse_time_arg)?,
            ) else {
                return cancelled();
            };

            let edit = SessionEdit {
                start_date: sd,
                start_time: st,
                end_date: ed,
                end_time: et,
            };
            if edit.is_empty() {
                warning("Nothing to edit: pass at least one of --start-date, --start-time, --end-date, --end-time.");
                return Ok(());
            }

            let updated = SessionLogic::edit(pool, id, &edit, max_hours)?;
            success(format!(
                "Session #{} updated: {} → {} ({}).",
                updated.id,
                updated.start_str(),
                updated.end_str(),
                updated.duration_str()
            ));
        }

        SessionAction::Del { id } => {
            let Some(id) = parse_id(id)? else {
                return cancelled();
            };

            match SessionLogic::delete(pool, id) {
                WriteOutcome::Applied => success(format!("Session #{} has been deleted.", id)),
                WriteOutcome::NotFound => {
                    warning(format!("No session with id {}: nothing deleted.", id))
                }
                WriteOutcome::Failed(e) => return Err(AppError::WriteFailed(e)),
            }
        }
    }

    Ok(())
}
