//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Mesh model to Wavefront OBJ conversion
//!
//! Output is the minimal subset needed to reload the mesh: `v` lines, then
//! one `vt` line per vertex, then `f a/a b/b c/c` lines for active faces.
//! Inactive faces are never written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::formats::pck::Uv;
use crate::mesh::{MeshModel, SCALE_FACTOR};

/// Convert a mesh model to OBJ text.
///
/// With `scale`, every vertex and UV component is divided by 256.
#[must_use]
pub fn to_obj(model: &MeshModel, scale: bool) -> String {
    let uvs = global_uvs(model);
    let mut lines = Vec::with_capacity(model.vertices.len() * 2 + model.active_face_count());

    for v in &model.vertices {
        lines.push(format!(
            "v {} {} {}",
            component(v.x, scale),
            component(v.y, scale),
            component(v.z, scale)
        ));
    }
    for uv in &uvs {
        lines.push(format!("vt {} {}", component(uv.u, scale), component(uv.v, scale)));
    }
    for group in &model.groups {
        for &[a, b, c] in &group.active {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            lines.push(format!("f {a}/{a} {b}/{b} {c}/{c}"));
        }
    }

    lines.join("\n")
}

/// Write a mesh model to an OBJ file
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_obj<P: AsRef<Path>>(model: &MeshModel, scale: bool, path: P) -> Result<()> {
    tracing::info!(
        "Exporting OBJ: {:?} ({} vertices, {} faces, scale: {})",
        path.as_ref(),
        model.vertices.len(),
        model.active_face_count(),
        scale
    );

    let obj = to_obj(model, scale);
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(obj.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// One UV per global vertex.
///
/// Groups whose UV count differs from their vertex count contribute zeros.
fn global_uvs(model: &MeshModel) -> Vec<Uv> {
    let mut uvs = Vec::with_capacity(model.vertices.len());
    for group in &model.groups {
        let source = &group.source;
        match &source.uvs {
            Some(group_uvs) if group_uvs.len() == source.vertices.len() => {
                uvs.extend_from_slice(group_uvs);
            }
            _ => uvs.extend(std::iter::repeat_n(Uv::default(), source.vertices.len())),
        }
    }
    uvs.resize(model.vertices.len(), Uv::default());
    uvs
}

fn component(value: i16, scale: bool) -> String {
    if scale {
        (f32::from(value) / SCALE_FACTOR).to_string()
    } else {
        value.to_string()
    }
}
