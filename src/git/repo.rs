use crate::error::{GitcalError, Result};
use crate::model::CommitMeta;
use chrono::{DateTime, Local};
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a registered repository root.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Author email and timestamp for every commit reachable from the
    /// current branch tip.
    pub fn commits(&self) -> Result<Vec<CommitMeta>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let authored_at = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid timestamp: {secs}")))?
                .with_timezone(&Local);
            let author = commit.author()?;

            commits.push(CommitMeta {
                author_email: author.email.to_string(),
                authored_at,
            });

            for parent_id in commit.parent_ids() {
                stack.push_back(parent_id.into());
            }
        }

        Ok(commits)
    }
}
