use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::db::stats;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// Sessions whose stored duration no longer matches their timestamps.
fn drifted_sessions(ctx: &AppContext) -> AppResult<Vec<i64>> {
    Ok(ctx
        .pool
        .sessions()
        .get_all_records()?
        .iter()
        .filter(|s| s.duration != s.end_time - s.start_time)
        .map(|s| s.id)
        .collect())
}

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if *info {
        stats::print_db_info(&ctx.pool, &ctx.cfg.database)?;
    }

    if *check {
        println!("{}▶ Checking {}…{}", CYAN, ctx.cfg.database, RESET);

        let integrity: String = ctx
            .pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
        }

        let drifted = drifted_sessions(ctx)?;
        if drifted.is_empty() {
            println!("{}✔ Every session duration matches its timestamps.{}\n", GREEN, RESET);
        } else {
            let ids: Vec<String> = drifted.iter().map(i64::to_string).collect();
            println!(
                "{}⚠ Stored duration differs from EndTime - StartTime for session(s): {}{}\n",
                YELLOW,
                ids.join(", "),
                RESET
            );
        }
    }

    if *vacuum {
        println!("{}▶ Compacting the database…{}", CYAN, RESET);
        ctx.pool.conn.execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
