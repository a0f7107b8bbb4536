//! Group-local to global index translation

use super::{MeshGroup, MeshModel, Triangle};
use crate::error::{Error, Result};
use crate::formats::pck::{FaceRecord, Group};

/// Concatenate groups into one vertex array and translate their faces.
///
/// Each face's 1-based local index `i` becomes `i - 1 + base`, where `base`
/// is the number of vertices appended before the group. Translated faces
/// that fall outside the global array are dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidFaceIndex`] for a local index of zero, which the
/// record decoder never produces.
pub fn remap(groups: Vec<Group>) -> Result<MeshModel> {
    let mut model = MeshModel::default();

    for (group_index, group) in groups.into_iter().enumerate() {
        let base_index = model.vertices.len();
        model.vertices.extend_from_slice(&group.vertices);
        let len = model.vertices.len();

        let mut active = Vec::new();
        let mut inactive = Vec::new();
        for face in &group.faces {
            let Some(triangle) = translate(face, base_index, len, group_index)? else {
                tracing::trace!("Dropping face {:?} of group {}", face.indices, group_index);
                continue;
            };
            if face.is_active() {
                active.push(triangle);
            } else {
                inactive.push(triangle);
            }
        }

        model.groups.push(MeshGroup {
            source: group,
            base_index,
            active,
            inactive,
        });
    }

    tracing::debug!(
        "Global mesh: {} vertices, {} active / {} inactive faces",
        model.vertices.len(),
        model.active_face_count(),
        model.inactive_face_count()
    );

    Ok(model)
}

fn translate(face: &FaceRecord, base: usize, len: usize, group: usize) -> Result<Option<Triangle>> {
    let mut triangle = [0; 3];
    for (slot, &local) in triangle.iter_mut().zip(&face.indices) {
        let Some(zero_based) = local.checked_sub(1) else {
            return Err(Error::InvalidFaceIndex { group, index: local });
        };
        let global = zero_based + base;
        if global >= len {
            return Ok(None);
        }
        *slot = global;
    }
    Ok(Some(triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pck::{Grammar, Vertex};

    fn group(count: u8, classifications: &[u8]) -> Group {
        let mut group = Group::new(Grammar::A, 0, count);
        group.vertices = (0..i16::from(count)).map(|i| Vertex { x: i, y: 0, z: 0 }).collect();
        group.faces = classifications
            .iter()
            .enumerate()
            .map(|(k, &classification)| FaceRecord {
                classification,
                indices: [k + 1, k + 2, k + 3],
            })
            .collect();
        group
    }

    #[test]
    fn test_remap_offsets_by_base() {
        let model = remap(vec![group(3, &[0]), group(4, &[1, 2])]).unwrap();

        assert_eq!(model.vertices.len(), 7);
        assert_eq!(model.groups[0].base_index, 0);
        assert_eq!(model.groups[0].active, vec![[0, 1, 2]]);
        assert_eq!(model.groups[1].base_index, 3);
        assert_eq!(model.groups[1].inactive, vec![[3, 4, 5]]);
        assert_eq!(model.groups[1].active, vec![[4, 5, 6]]);
        assert_eq!(model.active_face_count(), 2);
        assert_eq!(model.inactive_face_count(), 1);
    }

    #[test]
    fn test_remap_drops_out_of_range_faces() {
        let mut bad = group(3, &[0]);
        bad.faces.push(FaceRecord {
            classification: 0,
            indices: [3, 4, 5],
        });
        let model = remap(vec![bad]).unwrap();
        assert_eq!(model.groups[0].active, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_remap_rejects_zero_index() {
        let mut bad = group(3, &[]);
        bad.faces.push(FaceRecord {
            classification: 0,
            indices: [0, 1, 2],
        });
        assert!(matches!(
            remap(vec![group(3, &[]), bad]),
            Err(Error::InvalidFaceIndex { group: 1, index: 0 })
        ));
    }

    #[test]
    fn test_remap_empty() {
        let model = remap(Vec::new()).unwrap();
        assert!(model.vertices.is_empty());
        assert!(model.groups.is_empty());
    }
}
