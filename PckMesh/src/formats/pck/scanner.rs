//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Signature scanner that locates and decodes mesh groups
//!
//! The scan is a single linear pass. Bytes that look like a header prefix but
//! fail the count or marker check are skipped one at a time. Once a vertex
//! header matches, the rest of the group is mandatory: a truncated section or
//! a missing face signature rejects the whole file.

use super::pattern::{FACE_PADDING, HEADER_SIZE};
use super::records::{self, FACE_SIZE, UV_SIZE, VERTEX_SIZE};
use super::{Grammar, Group, Section};
use crate::error::{Error, Result};

/// Walks a PCK buffer and decodes every group it finds.
pub struct GroupScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> GroupScanner<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Scan the whole buffer.
    ///
    /// Groups are returned in increasing offset order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corrupted`] if a section runs past the end of the
    /// buffer, or [`Error::FacePatternNotFound`] if a group has no face
    /// signature after its vertex/UV block.
    pub fn scan(mut self) -> Result<Vec<Group>> {
        let mut groups = Vec::new();

        while let Some(header) = self.data.get(self.pos..self.pos + HEADER_SIZE) {
            let Some((grammar, count)) = Grammar::detect(header) else {
                self.pos += 1;
                continue;
            };

            let group = self.decode_group(grammar, count)?;
            tracing::debug!(
                "{} at {:#x}: {} vertices, {} UVs, {} active / {} inactive faces",
                group.grammar,
                group.start,
                group.count,
                group.uv_count(),
                group.active_faces().count(),
                group.inactive_faces().count()
            );
            self.pos = group.spans.faces_end;
            groups.push(group);
        }

        let vertices: usize = groups.iter().map(|g| g.vertices.len()).sum();
        let active: usize = groups.iter().map(|g| g.active_faces().count()).sum();
        let inactive: usize = groups.iter().map(|g| g.inactive_faces().count()).sum();
        tracing::info!(
            "Found {} groups: {} vertices, {} active / {} inactive faces",
            groups.len(),
            vertices,
            active,
            inactive
        );

        Ok(groups)
    }

    /// Decode the group whose vertex header sits at the current position.
    fn decode_group(&self, grammar: Grammar, count: u8) -> Result<Group> {
        let n = usize::from(count);
        let mut group = Group::new(grammar, self.pos, count);

        // Vertices
        let vertices_start = self.pos + HEADER_SIZE;
        let block = self.section(&group, Section::Vertices, vertices_start, n * VERTEX_SIZE)?;
        group.vertices = records::decode_vertices(block, n)?;
        group.spans.vertices_start = vertices_start;
        group.spans.vertices_end = vertices_start + block.len();

        // UVs, only when the header is directly adjacent
        let mut after = group.spans.vertices_end;
        if self.data.get(after..after + HEADER_SIZE) == Some(&grammar.uv_header(count)[..]) {
            let uvs_start = after + HEADER_SIZE;
            let block = self.section(&group, Section::Uvs, uvs_start, n * UV_SIZE)?;
            group.uvs = Some(records::decode_uvs(block, n)?);
            after = uvs_start + block.len();
            group.spans.uvs = Some((uvs_start, after));
        }

        // Faces
        let signature = grammar.face_signature(count);
        let faces_start = self.data[after..]
            .windows(HEADER_SIZE)
            .position(|window| window == signature)
            .map(|rel| after + rel)
            .ok_or(Error::FacePatternNotFound {
                grammar,
                count,
                search_from: after,
            })?;
        group.spans.faces_start = faces_start;

        let records_start = faces_start + HEADER_SIZE + FACE_PADDING;
        let face_bytes = records::face_count(count) * FACE_SIZE;
        let block = self.section(
            &group,
            Section::Faces,
            faces_start + HEADER_SIZE,
            FACE_PADDING + face_bytes,
        )?;
        group.faces = records::decode_faces(&block[FACE_PADDING..], count)?;
        group.spans.faces_end = records_start + face_bytes;

        Ok(group)
    }

    /// Borrow `len` bytes at `offset`, or fail with the group decoded so far.
    fn section(&self, group: &Group, section: Section, offset: usize, len: usize) -> Result<&'a [u8]> {
        self.data.get(offset..offset + len).ok_or_else(|| Error::Corrupted {
            section,
            offset,
            needed: len,
            available: self.data.len().saturating_sub(offset),
            group: Box::new(group.clone()),
        })
    }
}
