//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Assembled mesh model
//!
//! A [`MeshModel`] is the concatenation of every group found in a PCK file:
//! one global vertex array and, per group, the active and inactive triangles
//! translated to 0-based global indices. It is what renderers and the OBJ
//! exporter consume.

mod remap;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::formats::pck::{self, Group, Vertex};

pub use remap::remap;

/// Fixed factor converting raw 16-bit values to world units.
pub const SCALE_FACTOR: f32 = 256.0;

/// Three 0-based indices into [`MeshModel::vertices`].
pub type Triangle = [usize; 3];

/// A decoded group together with its globally indexed triangles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshGroup {
    pub source: Group,
    /// Position of this group's first vertex in the global array.
    pub base_index: usize,
    pub active: Vec<Triangle>,
    pub inactive: Vec<Triangle>,
}

/// The parse result of one PCK file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshModel {
    pub vertices: Vec<Vertex>,
    pub groups: Vec<MeshGroup>,
}

impl MeshModel {
    pub fn active_face_count(&self) -> usize {
        self.groups.iter().map(|g| g.active.len()).sum()
    }

    pub fn inactive_face_count(&self) -> usize {
        self.groups.iter().map(|g| g.inactive.len()).sum()
    }

    /// Vertex positions divided by [`SCALE_FACTOR`].
    #[must_use]
    pub fn scaled_vertices(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.scaled(SCALE_FACTOR)).collect()
    }

    /// Every inactive triangle across all groups.
    pub fn inactive_triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.groups.iter().flat_map(|g| g.inactive.iter())
    }
}

/// Parse a .pck file into a mesh model
///
/// # Errors
///
/// Returns an error if the file cannot be read or scanned.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<MeshModel> {
    tracing::info!("Parsing PCK: {:?}", path.as_ref());
    remap(pck::read_pck(path)?)
}

/// Parse PCK bytes into a mesh model
///
/// # Errors
///
/// Returns an error if the buffer cannot be scanned.
pub fn parse_bytes(data: &[u8]) -> Result<MeshModel> {
    remap(pck::parse_pck_bytes(data)?)
}
