use chrono::{DateTime, Datelike, Days, Local, TimeZone, Weekday};
use gitcal::calendar::{
    apply_commits, count_days_since, render, week_alignment_offset, CalendarGrid, Histogram,
    DAYS_IN_WINDOW, WEEKS_IN_WINDOW,
};
use gitcal::model::CommitMeta;
use pretty_assertions::assert_eq;

fn local(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("unambiguous local time")
}

fn commit(email: &str, authored_at: DateTime<Local>) -> CommitMeta {
    CommitMeta {
        author_email: email.to_string(),
        authored_at,
    }
}

#[test]
fn week_alignment_offset_covers_every_weekday() {
    assert_eq!(week_alignment_offset(Weekday::Sun), 7);
    assert_eq!(week_alignment_offset(Weekday::Mon), 6);
    assert_eq!(week_alignment_offset(Weekday::Tue), 5);
    assert_eq!(week_alignment_offset(Weekday::Wed), 4);
    assert_eq!(week_alignment_offset(Weekday::Thu), 3);
    assert_eq!(week_alignment_offset(Weekday::Fri), 2);
    assert_eq!(week_alignment_offset(Weekday::Sat), 1);
}

#[test]
fn count_days_since_is_zero_for_the_current_day() {
    let now = local(2025, 10, 15, 12);
    assert_eq!(count_days_since(local(2025, 10, 15, 0), now), Some(0));
    assert_eq!(count_days_since(local(2025, 10, 15, 23), now), Some(0));
}

#[test]
fn count_days_since_counts_calendar_day_boundaries() {
    let now = local(2025, 10, 15, 12);
    assert_eq!(count_days_since(local(2025, 10, 14, 23), now), Some(1));
    assert_eq!(count_days_since(local(2025, 10, 7, 6), now), Some(8));
}

#[test]
fn count_days_since_is_monotonic() {
    let now = local(2025, 10, 15, 12);
    let older = count_days_since(local(2025, 10, 5, 12), now).unwrap();
    let newer = count_days_since(local(2025, 10, 12, 12), now).unwrap();
    assert!(older >= newer);
}

#[test]
fn count_days_since_leaves_the_window_past_183_days() {
    let now = local(2025, 10, 15, 12);
    let old = now.checked_sub_days(Days::new(200)).unwrap();
    assert_eq!(count_days_since(old, now), None);

    let edge = now.checked_sub_days(Days::new(183)).unwrap();
    assert_eq!(count_days_since(edge, now), Some(183));
}

#[test]
fn histogram_prepopulates_every_offset_with_zero() {
    let hist = Histogram::new();
    for offset in 0..=DAYS_IN_WINDOW {
        assert_eq!(hist.get(offset), 0);
    }
}

#[test]
fn apply_commits_shifts_matching_commits_and_skips_other_authors() {
    // 2025-10-15 is a Wednesday, so the alignment shift is 4.
    let now = local(2025, 10, 15, 12);
    assert_eq!(now.weekday(), Weekday::Wed);

    let mut hist = Histogram::new();
    let counted = apply_commits(
        &mut hist,
        "a@x.com",
        [
            commit("a@x.com", local(2025, 10, 15, 9)),
            commit("a@x.com", local(2025, 10, 14, 18)),
            commit("a@x.com", local(2025, 10, 7, 11)),
            commit("b@x.com", local(2025, 10, 13, 8)),
        ],
        now,
    );

    assert_eq!(counted, 3);
    assert_eq!(hist.get(4), 1);
    assert_eq!(hist.get(5), 1);
    assert_eq!(hist.get(12), 1);
    assert_eq!(hist.get(6), 0);

    let total: u32 = (0..=DAYS_IN_WINDOW).map(|offset| hist.get(offset)).sum();
    assert_eq!(total, 3);
}

#[test]
fn apply_commits_drops_out_of_range_commits() {
    let now = local(2025, 10, 15, 12);
    let mut hist = Histogram::new();

    let counted = apply_commits(
        &mut hist,
        "a@x.com",
        [commit(
            "a@x.com",
            now.checked_sub_days(Days::new(200)).unwrap(),
        )],
        now,
    );

    assert_eq!(counted, 0);
    let total: u32 = (0..=DAYS_IN_WINDOW).map(|offset| hist.get(offset)).sum();
    assert_eq!(total, 0);
}

#[test]
fn apply_commits_drops_offsets_shifted_past_the_window_edge() {
    // In range before the shift (183 days), out of range after (+4).
    let now = local(2025, 10, 15, 12);
    let mut hist = Histogram::new();

    let counted = apply_commits(
        &mut hist,
        "a@x.com",
        [commit(
            "a@x.com",
            now.checked_sub_days(Days::new(183)).unwrap(),
        )],
        now,
    );

    assert_eq!(counted, 0);
    let total: u32 = (0..=DAYS_IN_WINDOW).map(|offset| hist.get(offset)).sum();
    assert_eq!(total, 0);
}

#[test]
fn grid_places_a_single_commit_at_week_and_row_of_its_offset() {
    let mut hist = Histogram::new();
    hist.increment(10);

    let grid = CalendarGrid::build(&hist);

    assert_eq!(grid.cell(10 / 7, 10 % 7), Some(1));
    let mut nonzero = 0;
    for week in 0..=WEEKS_IN_WINDOW + 1 {
        for row in 0..7 {
            if grid.cell(week, row).unwrap_or(0) > 0 {
                nonzero += 1;
            }
        }
    }
    assert_eq!(nonzero, 1);
}

#[test]
fn grid_covers_every_offset_exactly_once() {
    let grid = CalendarGrid::build(&Histogram::new());

    let mut defined = 0;
    for week in 0..=WEEKS_IN_WINDOW {
        for row in 0..7 {
            if grid.cell(week, row).is_some() {
                defined += 1;
            }
        }
    }
    assert_eq!(defined, DAYS_IN_WINDOW + 1);

    // The oldest week holds a partial two-day column.
    assert_eq!(grid.cell(WEEKS_IN_WINDOW, 1), Some(0));
    assert_eq!(grid.cell(WEEKS_IN_WINDOW, 2), None);
    assert_eq!(grid.cell(WEEKS_IN_WINDOW + 1, 0), None);
}

#[test]
fn render_emits_a_month_header_and_seven_weekday_rows() {
    console::set_colors_enabled(false);
    let now = local(2025, 10, 15, 12);
    let grid = CalendarGrid::build(&Histogram::new());

    let out = render(&grid, now);

    assert_eq!(out.lines().count(), 8);
    assert!(out.contains("May"));
    assert!(out.contains("Oct"));
    for label in [" Sun ", " Mon ", " Tue ", " Wed ", " Thu ", " Fri ", " Sat "] {
        assert!(out.contains(label), "missing day label {label:?}");
    }
}

#[test]
fn render_pads_cells_by_count_magnitude() {
    console::set_colors_enabled(false);
    let now = local(2025, 10, 15, 12);

    let mut hist = Histogram::new();
    hist.increment(10);
    for _ in 0..12 {
        hist.increment(20);
    }
    for _ in 0..123 {
        hist.increment(30);
    }

    let out = render(&CalendarGrid::build(&hist), now);

    assert!(out.contains("  - "));
    assert!(out.contains("  1 "));
    assert!(out.contains(" 12 "));
    assert!(out.contains("123 "));
}
