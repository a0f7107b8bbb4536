//! Batch PCK to OBJ export
//!
//! Finds `.pck` files under a directory and exports each one to OBJ in
//! parallel. A failing file is reported and skipped; the others continue.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::obj::export_obj;
use crate::mesh;

/// Progress information for one processed file
#[derive(Debug, Clone)]
pub struct ExportProgress {
    /// 1-based number of the file being processed
    pub current: usize,
    pub total: usize,
    /// Path of the file relative to the source directory
    pub file: String,
}

/// Result of a batch export
#[derive(Debug, Clone, Default)]
pub struct BatchExportResult {
    /// Number of successful exports
    pub success_count: usize,
    /// Number of failed exports
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all .pck files in a directory recursively
///
/// # Returns
/// A sorted list of paths to .pck files found in the directory tree.
pub fn find_pck_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut pck_files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pck"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    pck_files.sort();
    pck_files
}

/// Export PCK files to OBJ in parallel
///
/// Each file is written to `dest_base/<relative parent>/<stem>.obj`,
/// preserving the layout under `source_base`.
///
/// # Arguments
/// * `pck_files` - Files to export
/// * `source_base` - Base directory of the sources (for relative paths)
/// * `dest_base` - Destination directory
/// * `scale` - Divide exported coordinates by 256
/// * `progress` - Callback invoked before each file
pub fn batch_export<F>(
    pck_files: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    scale: bool,
    progress: F,
) -> BatchExportResult
where
    F: Fn(&ExportProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = pck_files.len();

    let results: Vec<String> = pck_files
        .par_iter()
        .map(|pck_path| {
            let relative_path = pck_path
                .strip_prefix(source_base)
                .unwrap_or(pck_path.as_path());
            let display_path = relative_path.to_string_lossy().to_string();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&ExportProgress {
                current,
                total,
                file: display_path.clone(),
            });

            let dest = dest_base.join(relative_path).with_extension("obj");
            match export_one(pck_path, &dest, scale) {
                Ok(faces) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Exported {display_path} ({faces} faces)")
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed to export {}: {}", display_path, e);
                    format!("Failed {display_path}: {e}")
                }
            }
        })
        .collect();

    BatchExportResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}

fn export_one(source: &Path, dest: &Path, scale: bool) -> crate::Result<usize> {
    let model = mesh::parse(source)?;
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    export_obj(&model, scale, dest)?;
    Ok(model.active_face_count())
}
