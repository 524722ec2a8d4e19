use crate::constants::{BACKUP_SUFFIX, JPEG_EXTENSIONS};
use crate::error::Result;
use crate::processing::{compress_image, CompressOptions};
use crate::utils::{create_progress_bar, format_file_size, reduction_percent};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Totals for one folder pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderSummary {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub files: usize,
}

impl FolderSummary {
    pub fn record(&mut self, original: u64, compressed: u64) {
        self.original_bytes += original;
        self.compressed_bytes += compressed;
        self.files += 1;
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_bytes, self.compressed_bytes)
    }
}

/// Run-level accumulator folded over folder summaries. Plain sequential
/// aggregation: one value threaded through the run, no process-wide state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub files: usize,
    pub folders: usize,
}

impl RunTotals {
    pub fn absorb(&mut self, summary: &FolderSummary) {
        self.original_bytes += summary.original_bytes;
        self.compressed_bytes += summary.compressed_bytes;
        self.files += summary.files;
        self.folders += 1;
    }

    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_bytes, self.compressed_bytes)
    }
}

pub fn is_jpeg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects the JPEG files directly inside `folder`, sorted by file name.
///
/// Not recursive; hidden entries and non-regular files are skipped.
pub fn collect_jpeg_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    // depth 0 is the folder itself, which may legitimately be dot-prefixed
    let walker = WalkDir::new(folder).min_depth(1).max_depth(1).into_iter();
    for entry in walker
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_jpeg_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Compresses every JPEG in `folder` in place, in sorted order.
///
/// A missing folder or a folder with no matching files is reported and
/// yields an empty summary, not an error. A file that fails to decode or
/// encode is logged and counted with original == compressed, and the run
/// moves on to the next file.
pub fn compress_folder(folder: &Path, options: &CompressOptions) -> Result<FolderSummary> {
    let mut summary = FolderSummary::default();

    if !folder.is_dir() {
        crate::warn!("Folder not found: {}, skipping", folder.display());
        return Ok(summary);
    }

    let files = collect_jpeg_files(folder)?;
    if files.is_empty() {
        crate::info!("No JPEG files found in {}", folder.display());
        return Ok(summary);
    }

    crate::info!("\nProcessing folder: {}", folder.display());
    crate::info!("Found {} JPEG files", files.len());

    let pb = create_progress_bar(files.len() as u64);
    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name.clone());

        let (original, compressed) = process_file(file, options);
        summary.record(original, compressed);

        if !crate::logger::is_quiet() {
            pb.println(format!(
                "  {}: {} -> {} ({:.1}%)",
                name,
                format_file_size(original),
                format_file_size(compressed),
                reduction_percent(original, compressed)
            ));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_folder_summary(folder, &summary);
    Ok(summary)
}

/// One file, one error boundary: any failure is logged and reported as a
/// zero-effect no-op so the batch keeps going.
fn process_file(path: &Path, options: &CompressOptions) -> (u64, u64) {
    let original = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    match compress_image(path, path, options) {
        Ok(sizes) => sizes,
        Err(e) => {
            crate::error!("Failed to process {}: {}", path.display(), e);
            (original, original)
        }
    }
}

/// Copies the folder's JPEG files into a sibling `<name>_backup` folder.
///
/// An existing backup folder is left untouched so a re-run cannot clobber
/// pristine originals with already-compressed files.
pub fn backup_folder(folder: &Path) -> Result<PathBuf> {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "folder".to_string());
    let backup = folder.with_file_name(format!("{name}{BACKUP_SUFFIX}"));

    if backup.exists() {
        crate::info!("Backup folder {} already exists, skipping", backup.display());
        return Ok(backup);
    }

    fs::create_dir_all(&backup)?;
    for file in collect_jpeg_files(folder)? {
        if let Some(file_name) = file.file_name() {
            fs::copy(&file, backup.join(file_name))?;
        }
    }

    Ok(backup)
}

fn print_folder_summary(folder: &Path, summary: &FolderSummary) {
    if summary.files == 0 {
        return;
    }
    crate::info!("Folder {} summary:", folder.display());
    crate::info!("  Files processed: {}", summary.files);
    crate::info!(
        "  Original size: {}",
        format_file_size(summary.original_bytes)
    );
    crate::info!(
        "  Compressed size: {}",
        format_file_size(summary.compressed_bytes)
    );
    crate::info!(
        "  Space saved: {} ({:.1}%)",
        format_file_size(summary.original_bytes.saturating_sub(summary.compressed_bytes)),
        summary.reduction_percent()
    );
}

pub fn print_run_summary(totals: &RunTotals) {
    crate::info!("\nRun summary:");
    crate::info!("  Folders: {}", totals.folders);
    crate::info!("  Files processed: {}", totals.files);

    if totals.files == 0 {
        crate::info!("  No JPEG files were found to process");
        return;
    }

    crate::info!(
        "  Total original size: {}",
        format_file_size(totals.original_bytes)
    );
    crate::info!(
        "  Total compressed size: {}",
        format_file_size(totals.compressed_bytes)
    );
    crate::info!(
        "  Total space saved: {} ({:.1}%)",
        format_file_size(totals.original_bytes.saturating_sub(totals.compressed_bytes)),
        totals.reduction_percent()
    );
}
