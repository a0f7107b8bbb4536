//! # PckMesh
//!
//! A pure-Rust library for pulling meshes out of PCK model blobs.
//!
//! PCK files have no header or offset table. Mesh groups are found by
//! scanning the raw bytes for one of two signature layouts, decoded into
//! vertices, UVs and active/inactive faces, then merged into one globally
//! indexed [`MeshModel`](mesh::MeshModel).
//!
//! ## Quick Start
//!
//! ```no_run
//! use pckmesh::prelude::*;
//!
//! // Parse a PCK file
//! let model = parse("model.pck")?;
//! println!(
//!     "{} groups, {} vertices, {} active faces",
//!     model.groups.len(),
//!     model.vertices.len(),
//!     model.active_face_count()
//! );
//!
//! // Export active faces to OBJ, dividing coordinates by 256
//! export(&model, true, "model.obj")?;
//! # Ok::<(), pckmesh::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pckmesh` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod mesh;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        BatchExportResult, ExportProgress, batch_export, export, export_obj, find_pck_files,
        to_obj,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::pck::{
        FaceRecord, FaceState, Grammar, Group, GroupScanner, PckInfo, Uv, Vertex, inspect_pck,
        parse_pck_bytes, read_pck,
    };
    pub use crate::mesh::{MeshGroup, MeshModel, SCALE_FACTOR, Triangle, parse, parse_bytes, remap};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
