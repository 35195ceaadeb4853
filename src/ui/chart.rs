//! Horizontal bar chart for goal progress.

use crate::config::MAX_CHART_WIDTH;
use crate::core::progress::GoalProgress;
use crate::utils::colors::{GREEN, RED, RESET, color_for_progress};
use crate::utils::formatting::{bold, pad_left, pad_right};
use crate::utils::hours2readable;

const BAR: char = '█';

/// Number of columns a bar of `value` takes when `max` fills `width`.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().min(width as f64) as usize
}

pub fn render_progress_chart(progress: &GoalProgress, width: usize) -> String {
    let width = width.min(MAX_CHART_WIDTH);
    let series = progress.series();
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_w = series.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let colors = [GREEN, RED];

    let mut out = String::new();
    out.push_str(&bold(&format!(
        "Goal Progress: {}, {}",
        progress.goal_month, progress.goal_year
    )));
    out.push('\n');

    for ((label, value), color) in series.iter().zip(colors) {
        let bar: String = std::iter::repeat_n(BAR, bar_length(*value, max, width)).collect();
        out.push_str(&format!(
            "{} {}{}{} {}\n",
            pad_right(label, label_w),
            color,
            bar,
            RESET,
            pad_left(&hours2readable(*value), 8)
        ));
    }

    let status = color_for_progress(progress.total_hours, progress.goal_hours);
    if progress.is_reached() {
        out.push_str(&format!(
            "{}Goal reached ({:.2}%){}\n",
            status,
            progress.percent(),
            RESET
        ));
    } else {
        out.push_str(&format!(
            "{}{:.2}% done, {} to go{}\n",
            status,
            progress.percent(),
            hours2readable(progress.remaining_hours()),
            RESET
        ));
    }

    out
}
