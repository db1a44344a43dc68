use super::{week_alignment_offset, DAYS_IN_WINDOW};
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::CommitMeta;
use chrono::{DateTime, Datelike, Local};

/// Commit counts per day offset, 0 = today. Every offset in the window is
/// present from the start; rendering relies on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    pub fn new() -> Self {
        Self {
            counts: vec![0; DAYS_IN_WINDOW + 1],
        }
    }

    pub fn get(&self, offset: usize) -> u32 {
        self.counts.get(offset).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, offset: usize) {
        if let Some(slot) = self.counts.get_mut(offset) {
            *slot += 1;
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole calendar-day boundaries between the start of `t`'s day and the start
/// of `now`'s day, stepped one day at a time so that a 23- or 25-hour day
/// still counts as exactly one. `None` once the count leaves the window.
pub fn count_days_since(t: DateTime<Local>, now: DateTime<Local>) -> Option<usize> {
    let today = now.date_naive();
    let mut day = t.date_naive();
    let mut days = 0;
    while day < today {
        day = day.succ_opt()?;
        days += 1;
        if days > DAYS_IN_WINDOW {
            return None;
        }
    }
    Some(days)
}

/// Bucket every matching commit into the histogram, shifted by the weekday
/// alignment offset. Returns the number of commits counted.
pub fn apply_commits<I>(
    hist: &mut Histogram,
    email: &str,
    commits: I,
    now: DateTime<Local>,
) -> usize
where
    I: IntoIterator<Item = CommitMeta>,
{
    let shift = week_alignment_offset(now.weekday());
    let mut counted = 0;
    for commit in commits {
        if commit.author_email != email {
            continue;
        }
        let Some(days_ago) = count_days_since(commit.authored_at, now) else {
            continue;
        };
        // Offsets pushed past the window edge by the shift are dropped.
        let shifted = days_ago + shift;
        if shifted <= DAYS_IN_WINDOW {
            hist.increment(shifted);
            counted += 1;
        }
    }
    counted
}

/// Read one registered repository and fold its history into the histogram.
pub fn fill_repo(
    hist: &mut Histogram,
    email: &str,
    path: &str,
    now: DateTime<Local>,
) -> Result<usize> {
    let repo = GitRepo::open(path)?;
    let commits = repo.commits()?;
    Ok(apply_commits(hist, email, commits, now))
}
