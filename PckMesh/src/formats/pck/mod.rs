//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! PCK model blob format
//!
//! PCK files hold one or more mesh groups at unknown offsets. Each group is a
//! vertex block, an optional UV block and a block of face records, located by
//! the signatures in [`pattern`]. Groups are decoded here with local,
//! 1-based face indices; see [`crate::mesh`] for the assembled model.

pub mod inspect;
pub mod pattern;
pub mod records;
mod reader;
mod scanner;

use std::fmt;

use serde::Serialize;

pub use inspect::{GroupInfo, PckInfo, inspect_pck, inspect_bytes};
pub use pattern::{Grammar, MAX_RECORD_COUNT};
pub use reader::{read_pck, parse_pck_bytes};
pub use scanner::GroupScanner;

/// A vertex position as stored in the file (unscaled).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Vertex {
    /// Position divided by `scale`.
    #[must_use]
    pub fn scaled(self, scale: f32) -> [f32; 3] {
        [
            f32::from(self.x) / scale,
            f32::from(self.y) / scale,
            f32::from(self.z) / scale,
        ]
    }
}

/// A texture coordinate as stored in the file (unscaled).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Uv {
    pub u: i16,
    pub v: i16,
}

/// Whether a face is part of the visible mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaceState {
    /// Even classification byte.
    Active,
    /// Odd classification byte. Never exported.
    Inactive,
}

/// One decoded face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceRecord {
    /// First byte of the record.
    pub classification: u8,
    /// 1-based vertex indices local to the group.
    pub indices: [usize; 3],
}

impl FaceRecord {
    #[must_use]
    pub fn state(&self) -> FaceState {
        if self.classification % 2 == 0 {
            FaceState::Active
        } else {
            FaceState::Inactive
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() == FaceState::Active
    }
}

/// Section of a group, used to report where a file is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Vertices,
    Uvs,
    Faces,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Vertices => "vertices",
            Section::Uvs => "UVs",
            Section::Faces => "faces",
        })
    }
}

/// Byte ranges a group occupies in the source buffer.
///
/// Ends are exclusive. Fields after the failing section stay zero in a
/// partially decoded group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupSpans {
    pub vertices_start: usize,
    pub vertices_end: usize,
    /// Present only when the group carries UVs.
    pub uvs: Option<(usize, usize)>,
    /// Offset of the face signature.
    pub faces_start: usize,
    /// End of the last face record; scanning resumes here.
    pub faces_end: usize,
}

/// RGBA display color, components in `0.0..=1.0`.
///
/// Purely decorative; ignored by group equality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupColor(pub [f32; 4]);

impl GroupColor {
    /// A random opaque color.
    #[must_use]
    pub fn random() -> Self {
        let [r, g, b]: [f32; 3] = rand::random();
        Self([r, g, b, 1.0])
    }
}

/// One decoded occurrence of a grammar match.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub grammar: Grammar,
    /// Offset of the vertex header.
    pub start: usize,
    /// Declared record count (`0..=42`).
    pub count: u8,
    pub vertices: Vec<Vertex>,
    /// `Some` only when a UV header immediately follows the vertex block.
    pub uvs: Option<Vec<Uv>>,
    pub faces: Vec<FaceRecord>,
    pub color: GroupColor,
    pub spans: GroupSpans,
}

impl Group {
    pub(crate) fn new(grammar: Grammar, start: usize, count: u8) -> Self {
        Self {
            grammar,
            start,
            count,
            vertices: Vec::new(),
            uvs: None,
            faces: Vec::new(),
            color: GroupColor::random(),
            spans: GroupSpans::default(),
        }
    }

    /// Number of decoded UVs (zero when absent).
    #[must_use]
    pub fn uv_count(&self) -> usize {
        self.uvs.as_ref().map_or(0, Vec::len)
    }

    pub fn active_faces(&self) -> impl Iterator<Item = &FaceRecord> {
        self.faces.iter().filter(|f| f.is_active())
    }

    pub fn inactive_faces(&self) -> impl Iterator<Item = &FaceRecord> {
        self.faces.iter().filter(|f| !f.is_active())
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.grammar == other.grammar
            && self.start == other.start
            && self.count == other.count
            && self.vertices == other.vertices
            && self.uvs == other.uvs
            && self.faces == other.faces
            && self.spans == other.spans
    }
}
