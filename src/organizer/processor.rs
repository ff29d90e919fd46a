use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::font::read_full_name;
use crate::models::{Action, Config, RunReport};
use crate::utils::{free_destination, relocate_to_directory, safe_move_file};

use super::planner::plan_actions;
use super::scan::scan_directory;

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

/// Rename within the same directory. The planned target is re-checked on disk
/// and moved to the next free suffix if another file took it since the scan.
fn rename_in_place(source: &Path, target: &Path) -> Result<PathBuf> {
    let dir = target
        .parent()
        .ok_or_else(|| Error::InvalidPath(target.to_path_buf()))?;
    let stem = target
        .file_stem()
        .ok_or_else(|| Error::InvalidPath(target.to_path_buf()))?;
    let extension = target.extension().unwrap_or_default();

    let dest = free_destination(dir, stem, extension, source);
    if dest != target {
        debug!(
            "{} was taken after the scan, using {} instead",
            target.display(),
            dest.display()
        );
    }
    if dest != source {
        safe_move_file(source, &dest)?;
    }
    Ok(dest)
}

fn apply_action(action: &Action, failed_dir: &Path, report: &mut RunReport) -> Result<()> {
    match action {
        Action::Rename { source, target } => {
            let dest = rename_in_place(source, target)?;
            println!("Renamed: {} → {}", display_name(source), display_name(&dest));
            report.renamed += 1;
        }
        Action::Stage { source, target } => {
            debug!("Staging {} as {}", source.display(), target.display());
            safe_move_file(source, target)?;
        }
        Action::Unchanged { path } => {
            println!("Already named correctly: {}", display_name(path));
            report.unchanged += 1;
        }
        Action::Quarantine { source, reason, .. } => {
            debug!("Quarantining {}: {}", source.display(), reason);
            let dest = relocate_to_directory(source, failed_dir)?;
            println!("Moved to failed_fonts: {}", dest.display());
            report.quarantined += 1;
        }
    }
    Ok(())
}

fn preview_action(action: &Action, report: &mut RunReport) {
    match action {
        Action::Rename { source, target } => {
            println!(
                "[dry run] Would rename: {} → {}",
                display_name(source),
                display_name(target)
            );
            report.renamed += 1;
        }
        Action::Stage { source, target } => {
            debug!("Would stage {} as {}", source.display(), target.display());
        }
        Action::Unchanged { path } => {
            println!("[dry run] Already named correctly: {}", display_name(path));
            report.unchanged += 1;
        }
        Action::Quarantine { target, reason, .. } => {
            println!("[dry run] Would move to failed_fonts ({}): {}", reason, target.display());
            report.quarantined += 1;
        }
    }
}

/// Plan the actions for `dir` without applying them
pub fn plan_directory(dir: &Path) -> Result<Vec<Action>> {
    let snapshot = scan_directory(dir)?;

    let lookups: Vec<_> = snapshot
        .fonts
        .iter()
        .map(|font| (font.clone(), read_full_name(&font.path)))
        .collect();

    Ok(plan_actions(&snapshot, lookups))
}

/// Rename every font file directly inside `dir` after its full name, moving
/// fonts without a usable name into `dir/failed_fonts`.
///
/// Only a missing or unreadable `dir` is an error. Failures on individual
/// files are logged, counted in the report, and the run moves on.
pub fn rename_fonts_in_directory(dir: &Path, config: &Config) -> Result<RunReport> {
    let actions = plan_directory(dir)?;
    let failed_dir = dir.join(crate::models::FAILED_DIR_NAME);
    let mut report = RunReport::default();

    debug!("Planned {} actions for {}", actions.len(), dir.display());

    for action in &actions {
        if config.dry_run {
            preview_action(action, &mut report);
            continue;
        }

        if let Err(e) = apply_action(action, &failed_dir, &mut report) {
            error!("Error processing {}: {}", action.source().display(), e);
            report.failed += 1;
        }
    }

    Ok(report)
}
