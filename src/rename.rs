use crate::batch::collect_jpeg_files;
use crate::error::{Result, TidyError};
use std::fs;
use std::path::{Path, PathBuf};

/// One planned rename: a source path and its computed target path in the
/// same folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// The full plan for a folder, in sorted-filename order. Building the plan
/// reads the directory once and touches nothing else on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub folder: PathBuf,
    pub prefix: String,
    pub entries: Vec<RenameEntry>,
}

/// Outcome counts for one applied plan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameStats {
    pub renamed: usize,
    pub already_named: usize,
    pub collisions: usize,
}

/// Number of decimal digits in `total`, which is the zero-padding width for
/// a folder of that many files.
pub fn digit_count(total: usize) -> usize {
    total.to_string().len()
}

/// Target file name for the file at 1-based `index` out of `total`.
pub fn padded_name(prefix: &str, index: usize, total: usize, extension: &str) -> String {
    let width = digit_count(total);
    format!("{prefix}{index:0width$}.{extension}")
}

/// Plans the sequential rename of every JPEG in `folder`.
///
/// Files are sorted by name ascending and assigned indices 1..=N; the
/// padding width is the digit count of N and the extension is lowercased.
/// A missing folder is an error here, unlike the compress path.
pub fn plan_folder(folder: &Path, prefix: &str) -> Result<RenamePlan> {
    if !folder.is_dir() {
        return Err(TidyError::FolderNotFound(folder.to_path_buf()));
    }

    let files = collect_jpeg_files(folder)?;
    let total = files.len();

    let entries = files
        .into_iter()
        .enumerate()
        .map(|(i, source)| {
            let extension = source
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("jpg")
                .to_lowercase();
            let target = folder.join(padded_name(prefix, i + 1, total, &extension));
            RenameEntry { source, target }
        })
        .collect();

    Ok(RenamePlan {
        folder: folder.to_path_buf(),
        prefix: prefix.to_string(),
        entries,
    })
}

/// Applies a plan entry by entry, in order.
///
/// A source already at its target is skipped silently. A target occupied by
/// a different file is skipped with a warning; the rename is best-effort,
/// not transactional, so skipped collisions can leave a mix of old and new
/// names. Any other filesystem failure propagates and stops the batch.
pub fn apply_plan(plan: &RenamePlan) -> Result<RenameStats> {
    let mut stats = RenameStats::default();

    for entry in &plan.entries {
        if entry.source == entry.target {
            stats.already_named += 1;
            continue;
        }

        if entry.target.exists() {
            crate::warn!(
                "Skipping {}: target {} already exists",
                entry.source.display(),
                entry.target.display()
            );
            stats.collisions += 1;
            continue;
        }

        fs::rename(&entry.source, &entry.target)?;
        crate::info!(
            "Renamed {} -> {}",
            entry.source.display(),
            entry.target.display()
        );
        stats.renamed += 1;
    }

    Ok(stats)
}
