/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// goal reached → green
/// some progress → yellow
/// nothing yet → grey
pub fn color_for_progress(total_hours: f64, goal_hours: i64) -> &'static str {
    if total_hours >= goal_hours as f64 {
        GREEN
    } else if total_hours > 0.0 {
        YELLOW
    } else {
        GREY
    }
}
