use crate::error::{GitcalError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const REGISTRY_FILE_NAME: &str = ".gitcal";

/// Known repository roots, one path per line on disk. Order is the order of
/// first discovery and is stable across merges.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
    paths: Vec<String>,
}

impl Registry {
    /// Read the registry file. A missing file is created empty; lines are
    /// kept as opaque path strings.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self {
                paths: content
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::write(path, "")?;
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Append every discovered path not already present, in discovery order.
    /// Returns the number of newly added entries.
    pub fn merge<I>(&mut self, discovered: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for path in discovered {
            if !self.paths.contains(&path) {
                self.paths.push(path);
                added += 1;
            }
        }
        added
    }

    /// Overwrite the registry file with the full path list.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.paths.join("\n"))?;
        Ok(())
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Default registry location, a dotfile in the user's home directory.
pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(REGISTRY_FILE_NAME))
        .ok_or(GitcalError::NoHomeDir)
}
