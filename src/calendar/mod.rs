pub mod exec;
pub mod grid;
pub mod histogram;
pub mod render;

pub use exec::exec;
pub use grid::CalendarGrid;
pub use histogram::{apply_commits, count_days_since, fill_repo, Histogram};
pub use render::render;

use chrono::Weekday;

/// Tracked window: today plus 183 whole days back, 26 weeks on screen.
pub const DAYS_IN_WINDOW: usize = 183;
pub const WEEKS_IN_WINDOW: usize = 26;

/// Shift applied to day offsets so that offset 0 lands in the grid row
/// matching today's actual weekday.
pub fn week_alignment_offset(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}
