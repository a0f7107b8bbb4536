//! Fixed-layout record decoding
//!
//! Vertices are three little-endian `i16`, UVs two. Face records are three
//! bytes of which only the first is read; the vertex indices are implied by
//! the record's position.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use super::{FaceRecord, Uv, Vertex};
use crate::error::Result;

/// Size of one vertex record in bytes.
pub const VERTEX_SIZE: usize = 6;

/// Size of one UV record in bytes.
pub const UV_SIZE: usize = 4;

/// Size of one face record in bytes.
pub const FACE_SIZE: usize = 3;

/// Number of face records a group with `count` vertices carries.
#[must_use]
pub fn face_count(count: u8) -> usize {
    usize::from(count).saturating_sub(2)
}

/// Decode `count` vertex records from the start of `data`.
///
/// # Errors
///
/// Returns [`Error::Io`] if `data` is shorter than `count` records.
///
/// [`Error::Io`]: crate::Error::Io
pub fn decode_vertices(data: &[u8], count: usize) -> Result<Vec<Vertex>> {
    let mut cursor = Cursor::new(data);
    let mut vertices = Vec::with_capacity(count);
    for _ in 0..count {
        let x = cursor.read_i16::<LittleEndian>()?;
        let y = cursor.read_i16::<LittleEndian>()?;
        let z = cursor.read_i16::<LittleEndian>()?;
        vertices.push(Vertex { x, y, z });
    }
    Ok(vertices)
}

/// Decode `count` UV records from the start of `data`.
///
/// # Errors
///
/// Returns [`Error::Io`] if `data` is shorter than `count` records.
///
/// [`Error::Io`]: crate::Error::Io
pub fn decode_uvs(data: &[u8], count: usize) -> Result<Vec<Uv>> {
    let mut cursor = Cursor::new(data);
    let mut uvs = Vec::with_capacity(count);
    for _ in 0..count {
        let u = cursor.read_i16::<LittleEndian>()?;
        let v = cursor.read_i16::<LittleEndian>()?;
        uvs.push(Uv { u, v });
    }
    Ok(uvs)
}

/// Decode the face records of a group with `count` vertices.
///
/// The k-th record (0-based) describes the triangle `(k+1, k+2, k+3)`.
/// Records whose last index would exceed `count` are dropped.
///
/// # Errors
///
/// Returns [`Error::Io`] if `data` is shorter than the face block.
///
/// [`Error::Io`]: crate::Error::Io
pub fn decode_faces(data: &[u8], count: u8) -> Result<Vec<FaceRecord>> {
    let records = face_count(count);
    let mut cursor = Cursor::new(data);
    let mut faces = Vec::with_capacity(records);
    for k in 0..records {
        let classification = cursor.read_u8()?;
        // Two trailing bytes carry nothing we know how to interpret
        cursor.read_u16::<LittleEndian>()?;

        let first = k + 1;
        if first + 2 > usize::from(count) {
            continue;
        }
        faces.push(FaceRecord {
            classification,
            indices: [first, first + 1, first + 2],
        });
    }
    Ok(faces)
}
