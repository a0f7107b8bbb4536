//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Format conversion utilities
//!
//! - Mesh model → Wavefront OBJ
//! - Batch PCK → OBJ export over a directory tree

pub mod batch;
pub mod obj;

pub use batch::{BatchExportResult, ExportProgress, batch_export, find_pck_files};
pub use obj::{export_obj, to_obj};

/// Export a mesh model to OBJ (alias of [`export_obj`]).
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export<P: AsRef<std::path::Path>>(
    model: &crate::mesh::MeshModel,
    scale: bool,
    path: P,
) -> crate::Result<()> {
    export_obj(model, scale, path)
}
