//! PCK file inspection utilities
//!
//! Per-group layout and decoded counts, the information an editor shows in
//! its group tree. Serializable to JSON.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use super::reader::read_pck_buffer;
use super::GroupColor;
use crate::error::Result;
use crate::mesh::{self, MeshGroup, Triangle};

/// A byte range in the source file with its contents.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub start: usize,
    pub end: usize,
    pub size: usize,
    /// Uppercase hex dump of the range.
    pub hex: String,
}

/// Information about one decoded group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    /// 1-based position in scan order.
    pub index: usize,
    pub grammar: String,
    pub vertex_count: usize,
    pub uv_count: usize,
    pub color: GroupColor,
    pub vertices: SectionInfo,
    pub uvs: Option<SectionInfo>,
    /// From the face signature to the last face record.
    pub faces: SectionInfo,
    pub base_index: usize,
    pub active_faces: Vec<Triangle>,
    pub inactive_faces: Vec<Triangle>,
}

/// Information about a whole PCK file.
#[derive(Debug, Clone, Serialize)]
pub struct PckInfo {
    pub file_path: String,
    pub file_size: usize,
    pub group_count: usize,
    pub total_vertices: usize,
    pub total_active_faces: usize,
    pub total_inactive_faces: usize,
    pub groups: Vec<GroupInfo>,
}

/// Inspect a PCK file.
///
/// # Errors
/// Returns an error if the file cannot be read or scanned.
pub fn inspect_pck<P: AsRef<Path>>(source: P) -> Result<PckInfo> {
    let source_path = source.as_ref();
    let data = read_pck_buffer(source_path)?;
    inspect_bytes(&data, source_path.display().to_string())
}

/// Inspect a PCK buffer.
///
/// # Errors
/// Returns an error if the buffer cannot be scanned.
pub fn inspect_bytes(data: &[u8], file_path: String) -> Result<PckInfo> {
    let model = mesh::parse_bytes(data)?;

    let groups = model
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| group_info(i + 1, group, data))
        .collect();

    Ok(PckInfo {
        file_path,
        file_size: data.len(),
        group_count: model.groups.len(),
        total_vertices: model.vertices.len(),
        total_active_faces: model.active_face_count(),
        total_inactive_faces: model.inactive_face_count(),
        groups,
    })
}

fn group_info(index: usize, group: &MeshGroup, data: &[u8]) -> GroupInfo {
    let source = &group.source;
    let spans = &source.spans;
    GroupInfo {
        index,
        grammar: source.grammar.name().to_string(),
        vertex_count: source.vertices.len(),
        uv_count: source.uv_count(),
        color: source.color,
        vertices: section(data, spans.vertices_start, spans.vertices_end),
        uvs: spans.uvs.map(|(start, end)| section(data, start, end)),
        faces: section(data, spans.faces_start, spans.faces_end),
        base_index: group.base_index,
        active_faces: group.active.clone(),
        inactive_faces: group.inactive.clone(),
    }
}

fn section(data: &[u8], start: usize, end: usize) -> SectionInfo {
    SectionInfo {
        start,
        end,
        size: end - start,
        hex: hex_upper(&data[start..end]),
    }
}

fn hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02X}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pck::Grammar;

    #[test]
    fn test_inspect_bytes() {
        let mut data = vec![0x00];
        data.extend(Grammar::A.vertex_header(3));
        data.extend([0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
        data.extend([0u8; 12]);
        data.extend(Grammar::A.uv_header(3));
        data.extend([0u8; 12]);
        data.extend(Grammar::A.face_signature(3));
        data.extend([0u8; 6]);
        data.extend([0x01, 0x00, 0x00]);

        let info = inspect_bytes(&data, "test.pck".to_string()).unwrap();
        assert_eq!(info.group_count, 1);
        assert_eq!(info.total_vertices, 3);
        assert_eq!(info.total_active_faces, 0);
        assert_eq!(info.total_inactive_faces, 1);

        let group = &info.groups[0];
        assert_eq!(group.index, 1);
        assert_eq!(group.grammar, "pattern A");
        assert_eq!(group.vertices.start, 5);
        assert_eq!(group.vertices.size, 18);
        assert!(group.vertices.hex.starts_with("010002000300"));
        assert_eq!(group.uvs.as_ref().map(|u| (u.start, u.end)), Some((27, 39)));
        assert_eq!(group.faces.start, 39);
        assert_eq!(group.faces.hex, "9A00036A000000000000010000");
        assert_eq!(group.inactive_faces, vec![[0, 1, 2]]);

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"grammar\":\"pattern A\""));
    }

    #[test]
    fn test_hex_upper() {
        assert_eq!(hex_upper(&[0x00, 0xAB, 0x7f]), "00AB7F");
    }
}
