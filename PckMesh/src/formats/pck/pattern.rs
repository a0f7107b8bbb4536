//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Record-group grammars recognized inside PCK blobs
//!
//! A PCK file has no header or offset table. Mesh data is found by matching
//! one of two fixed signature layouts at arbitrary byte positions:
//!
//! ```text
//! VertexHeader := prefix(2) N 0x69
//! UVHeader     := uv_prefix(2) N 0x65
//! FaceHeader   := face_prefix(2) N 0x6A
//! ```

use std::fmt;

use serde::Serialize;

/// Largest record count a header may declare.
pub const MAX_RECORD_COUNT: u8 = 0x2A;

/// Terminator of the vertex header.
pub const VERTEX_MARKER: u8 = 0x69;

/// Terminator of the UV header.
pub const UV_MARKER: u8 = 0x65;

/// Byte following the count in the face signature.
pub const FACE_MARKER: u8 = 0x6A;

/// Length of every section header and of the face signature.
pub const HEADER_SIZE: usize = 4;

/// Undecoded bytes between the face signature and the first face record.
///
/// Always required in the buffer, even for groups with fewer than three
/// vertices and therefore no face records. A file that ends inside the
/// padding is rejected as corrupted.
pub const FACE_PADDING: usize = 6;

/// One of the two signature layouts a group may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grammar {
    /// `EE 00` vertices, `C4 00` UVs, `9A 00` faces.
    A,
    /// `1B 02` vertices, `F1 01` UVs, `C7 01` faces.
    B,
}

impl Grammar {
    /// All grammars in the order they are tried at each position.
    pub const ALL: [Grammar; 2] = [Grammar::A, Grammar::B];

    /// Two-byte prefix of the vertex header.
    #[must_use]
    pub const fn vertex_prefix(self) -> [u8; 2] {
        match self {
            Grammar::A => [0xEE, 0x00],
            Grammar::B => [0x1B, 0x02],
        }
    }

    /// Two-byte prefix of the UV header.
    #[must_use]
    pub const fn uv_prefix(self) -> [u8; 2] {
        match self {
            Grammar::A => [0xC4, 0x00],
            Grammar::B => [0xF1, 0x01],
        }
    }

    /// Two-byte prefix of the face signature.
    #[must_use]
    pub const fn face_prefix(self) -> [u8; 2] {
        match self {
            Grammar::A => [0x9A, 0x00],
            Grammar::B => [0xC7, 0x01],
        }
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Grammar::A => "pattern A",
            Grammar::B => "pattern B",
        }
    }

    /// Full vertex header for a given count.
    #[must_use]
    pub const fn vertex_header(self, count: u8) -> [u8; HEADER_SIZE] {
        let [p0, p1] = self.vertex_prefix();
        [p0, p1, count, VERTEX_MARKER]
    }

    /// Full UV header for a given count.
    #[must_use]
    pub const fn uv_header(self, count: u8) -> [u8; HEADER_SIZE] {
        let [p0, p1] = self.uv_prefix();
        [p0, p1, count, UV_MARKER]
    }

    /// Full face signature for a given count.
    #[must_use]
    pub const fn face_signature(self, count: u8) -> [u8; HEADER_SIZE] {
        let [p0, p1] = self.face_prefix();
        [p0, p1, count, FACE_MARKER]
    }

    /// Check whether `header` is a structurally valid vertex header of this
    /// grammar, returning the declared record count.
    #[must_use]
    pub fn match_vertex_header(self, header: &[u8]) -> Option<u8> {
        let &[p0, p1, count, marker] = header else {
            return None;
        };
        if [p0, p1] != self.vertex_prefix() || count > MAX_RECORD_COUNT || marker != VERTEX_MARKER {
            return None;
        }
        Some(count)
    }

    /// Try every grammar against `header`.
    ///
    /// Prefixes differ between grammars, so at most one can match.
    #[must_use]
    pub fn detect(header: &[u8]) -> Option<(Grammar, u8)> {
        Self::ALL
            .into_iter()
            .find_map(|grammar| grammar.match_vertex_header(header).map(|n| (grammar, n)))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
