//! Error types for `PckMesh`

use thiserror::Error;

use crate::formats::pck::{Grammar, Group, Section};

/// The error type for `PckMesh` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== PCK Structure Errors ====================
    /// A declared section runs past the end of the buffer.
    ///
    /// Carries the group as far as it was decoded before the failure.
    #[error(
        "corrupted or incomplete PCK file ({section}): needs {needed} bytes at {offset:#x}, {available} available"
    )]
    Corrupted {
        /// The section that did not fit.
        section: Section,
        /// Offset where the section starts.
        offset: usize,
        /// Bytes the section declares.
        needed: usize,
        /// Bytes left in the buffer from `offset`.
        available: usize,
        /// The partially decoded group.
        group: Box<Group>,
    },

    /// No face signature follows a valid vertex/UV block.
    #[error("face pattern not found: {grammar} with {count} vertices, searched from {search_from:#x}")]
    FacePatternNotFound {
        /// Grammar of the group whose faces are missing.
        grammar: Grammar,
        /// Declared record count of the group.
        count: u8,
        /// Offset the search started from.
        search_from: usize,
    },

    /// A face index could not be translated into the global vertex array.
    ///
    /// Records produced by the decoder never trigger this.
    #[error("invalid face index {index} in group {group}")]
    InvalidFaceIndex {
        /// Position of the group in scan order.
        group: usize,
        /// The offending local index.
        index: usize,
    },

    // ==================== Serialization Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for `PckMesh` operations.
pub type Result<T> = std::result::Result<T, Error>;
