use super::{histogram, render, CalendarGrid, Histogram};
use crate::model::RepoOutcome;
use crate::registry::Registry;
use anyhow::Context;
use chrono::Local;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub fn exec(registry_path: &Path, email: &str) -> anyhow::Result<()> {
    let registry = Registry::load(registry_path)
        .with_context(|| format!("Failed to load registry at {}", registry_path.display()))?;
    let now = Local::now();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut hist = Histogram::new();
    let mut outcomes = Vec::new();
    for path in registry.paths() {
        pb.set_message(format!("Reading {path}"));
        let result = histogram::fill_repo(&mut hist, email, path, now);
        outcomes.push(RepoOutcome {
            path: path.clone(),
            result,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    for outcome in &outcomes {
        if let Err(err) = &outcome.result {
            eprintln!(
                "{} {}: {err}",
                style("warning:").yellow().bold(),
                outcome.path
            );
        }
    }
    if failed > 0 && failed == outcomes.len() {
        anyhow::bail!("none of the {failed} registered repositories could be read");
    }

    let grid = CalendarGrid::build(&hist);
    print!("{}", render(&grid, now));
    Ok(())
}
