use super::{week_alignment_offset, CalendarGrid, DAYS_IN_WINDOW, WEEKS_IN_WINDOW};
use chrono::{DateTime, Datelike, Days, Local};
use console::style;

/// Render the grid as a month header plus seven weekday rows, oldest week on
/// the left, current week rightmost.
pub fn render(grid: &CalendarGrid, now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(&month_header(now));

    let today_row = week_alignment_offset(now.weekday()) - 1;
    for row in 0..7 {
        out.push_str(day_label(row));
        for week in (0..=WEEKS_IN_WINDOW + 1).rev() {
            let value = grid.cell(week, row).unwrap_or(0);
            let today = week == 0 && row == today_row;
            out.push_str(&format_cell(value, today));
        }
        out.push('\n');
    }
    out
}

/// One label per week column, printed when the month changes from the
/// previous column's month.
fn month_header(now: DateTime<Local>) -> String {
    let today = now.date_naive();
    let mut week = today - Days::new(DAYS_IN_WINDOW as u64);
    let mut month = week.month();

    let mut out = String::from("         ");
    loop {
        if week.month() != month {
            out.push_str(&format!("{} ", week.format("%b")));
            month = week.month();
        } else {
            out.push_str("    ");
        }
        week = week + Days::new(7);
        if week > today {
            break;
        }
    }
    out.push('\n');
    out
}

fn day_label(row: usize) -> &'static str {
    match row {
        0 => " Sun ",
        1 => " Mon ",
        2 => " Tue ",
        3 => " Wed ",
        4 => " Thu ",
        5 => " Fri ",
        6 => " Sat ",
        _ => "     ",
    }
}

fn format_cell(value: u32, today: bool) -> String {
    let text = if value == 0 {
        String::from("  - ")
    } else if value < 10 {
        format!("  {value} ")
    } else if value < 100 {
        format!(" {value} ")
    } else {
        format!("{value} ")
    };

    let styled = if today {
        style(text).white().on_magenta().bold()
    } else {
        match value {
            0 => style(text).dim(),
            1..=4 => style(text).black().on_white().bold(),
            5..=9 => style(text).black().on_yellow().bold(),
            _ => style(text).black().on_green().bold(),
        }
    };
    styled.to_string()
}
