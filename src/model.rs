use crate::error::GitcalError;
use chrono::{DateTime, Local};

/// The slice of a commit the calendar cares about.
#[derive(Debug, Clone)]
pub struct CommitMeta {
    pub author_email: String,
    pub authored_at: DateTime<Local>,
}

/// Per-repository result of a stats pass: how many commits were counted,
/// or why the repository could not be read.
#[derive(Debug)]
pub struct RepoOutcome {
    pub path: String,
    pub result: std::result::Result<usize, GitcalError>,
}
