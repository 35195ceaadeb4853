use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::round2;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let sessions = pool.sessions().count()?;
    let goals = pool.goals().count()?;
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);
    println!("{}• Goals:{} {}{}{}", CYAN, RESET, GREEN, goals, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(StartTime), MAX(StartTime) FROM CodeTrackerTable",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Session range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTAL HOURS
    //
    let total_hours: f64 = pool
        .sessions()
        .get_all_records()?
        .iter()
        .map(|s| s.total_hours())
        .sum();
    println!("{}• Total coded:{} {:.2}h", CYAN, RESET, round2(total_hours));

    println!();
    Ok(())
}
