//! PCK CLI commands
//!
//! Commands for inspecting and exporting PCK files.

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{
    CUBE, DISK, LOOKING_GLASS, TRUCK, print_done, print_step, simple_bar,
};
use crate::converter::{BatchExportResult, batch_export, export_obj, find_pck_files};
use crate::formats::pck::{inspect_pck, read_pck};
use crate::mesh::remap;

/// Inspect a PCK file and display its groups.
pub fn inspect(path: &Path, json: Option<&Path>) -> anyhow::Result<()> {
    let info = inspect_pck(path)?;

    if let Some(output) = json {
        std::fs::write(output, serde_json::to_string_pretty(&info)?)?;
        println!("Written to: {}", output.display());
        return Ok(());
    }

    println!("PCK File Information");
    println!("====================");
    println!("File:            {}", info.file_path);
    println!("File size:       {} bytes", info.file_size);
    println!("Groups:          {}", info.group_count);
    println!("Vertices:        {}", info.total_vertices);
    println!("Active faces:    {}", info.total_active_faces);
    println!("Inactive faces:  {}", info.total_inactive_faces);
    println!();

    println!("Groups:");
    println!("-------");
    for group in &info.groups {
        let uvs = group
            .uvs
            .as_ref()
            .map(|s| format!("{:#x}-{:#x}", s.start, s.end))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "  [{:3}] {} | {:2} vertices @ {:#x}-{:#x} | {:2} UVs ({}) | faces @ {:#x} | {} active / {} inactive",
            group.index,
            group.grammar,
            group.vertex_count,
            group.vertices.start,
            group.vertices.end,
            group.uv_count,
            uvs,
            group.faces.start,
            group.active_faces.len(),
            group.inactive_faces.len()
        );
    }

    Ok(())
}

/// Parse a PCK file and write it as OBJ.
pub fn export(source: &Path, destination: Option<&Path>, scale: bool, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.with_extension("obj"));

    if !quiet {
        print_step(1, 3, LOOKING_GLASS, &format!("Scanning {}...", source.display()));
    }
    let groups = read_pck(source)?;

    if !quiet {
        print_step(2, 3, CUBE, &format!("Assembling {} groups...", groups.len()));
    }
    let model = remap(groups)?;

    if !quiet {
        print_step(3, 3, DISK, &format!("Writing {}...", destination.display()));
    }
    export_obj(&model, scale, &destination)?;

    if !quiet {
        println!(
            "  {} vertices, {} faces ({} inactive skipped)",
            model.vertices.len(),
            model.active_face_count(),
            model.inactive_face_count()
        );
        print_done(start.elapsed());
    }

    Ok(())
}

/// Export every PCK file under a directory.
pub fn batch(source: &Path, destination: &Path, scale: bool, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let files = find_pck_files(source);
    if files.is_empty() {
        anyhow::bail!("No .pck files found in {}", source.display());
    }

    if !quiet {
        print_step(1, 1, TRUCK, &format!("Exporting {} PCK files...", files.len()));
    }

    let pb = if quiet {
        indicatif::ProgressBar::hidden()
    } else {
        simple_bar(files.len() as u64, "Exporting")
    };

    let result = batch_export(&files, source, destination, scale, |progress| {
        pb.set_position(progress.current as u64);
        pb.set_message(progress.file.clone());
    });
    pb.finish_and_clear();

    for line in batch_report(&result, files.len(), quiet) {
        println!("{line}");
    }

    if !quiet {
        print_done(start.elapsed());
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} files failed to export", result.fail_count);
    }
    Ok(())
}

/// Per-file messages and the summary line; nothing when quiet.
fn batch_report(result: &BatchExportResult, total: usize, quiet: bool) -> Vec<String> {
    if quiet {
        return Vec::new();
    }
    let mut lines: Vec<String> = result.results.iter().map(|m| format!("  {m}")).collect();
    lines.push(format!(
        "Exported {} of {} files ({} failed)",
        result.success_count, total, result.fail_count
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> BatchExportResult {
        BatchExportResult {
            success_count: 1,
            fail_count: 1,
            results: vec!["Exported a.pck (2 faces)".to_string(), "Failed b.pck: boom".to_string()],
        }
    }

    #[test]
    fn test_batch_report_lists_files() {
        let lines = batch_report(&sample_result(), 2, false);
        assert_eq!(
            lines,
            vec![
                "  Exported a.pck (2 faces)",
                "  Failed b.pck: boom",
                "Exported 1 of 2 files (1 failed)",
            ]
        );
    }

    #[test]
    fn test_batch_report_quiet_is_silent() {
        assert!(batch_report(&sample_result(), 2, true).is_empty());
    }
}
