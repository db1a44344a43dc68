use crate::registry::Registry;
use anyhow::Context;
use console::style;
use std::path::Path;
use walkdir::WalkDir;

pub const VCS_MARKER: &str = ".git";
pub const SKIP_DIRS: &[&str] = &["vendor", "node_modules"];

#[derive(Debug, Default)]
pub struct ScanReport {
    pub found: Vec<String>,
    pub warnings: Vec<walkdir::Error>,
}

/// Walk `root` depth-first looking for repository roots. A `.git` child marks
/// its parent as a repository and is not descended into; vendor and package
/// caches are pruned outright. Unreadable subtrees are collected as warnings
/// and the walk continues.
pub fn scan_folders(root: &Path) -> ScanReport {
    let mut report = ScanReport::default();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report.warnings.push(err);
                continue;
            }
        };
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name == VCS_MARKER {
            if let Some(parent) = entry.path().parent() {
                report.found.push(normalize(parent));
            }
            walker.skip_current_dir();
        } else if SKIP_DIRS.contains(&name.as_ref()) {
            walker.skip_current_dir();
        }
    }

    report
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy()
        .trim_end_matches(std::path::MAIN_SEPARATOR)
        .to_string()
}

pub fn exec(registry_path: &Path, folder: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(folder.is_dir(), "{} is not a directory", folder.display());

    println!("Found folders:\n");
    let report = scan_folders(folder);
    for warning in &report.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }
    for path in &report.found {
        println!("{path}");
    }

    let mut registry = Registry::load(registry_path)
        .with_context(|| format!("Failed to load registry at {}", registry_path.display()))?;
    let added = registry.merge(report.found);
    registry
        .save(registry_path)
        .with_context(|| format!("Failed to save registry at {}", registry_path.display()))?;

    println!("\nAdded {added} new repositories ({} registered in total)", registry.len());
    Ok(())
}
