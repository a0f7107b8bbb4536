//! File format handlers
//!
//! Only the PCK model blob for now. Decoded groups are turned into a
//! renderable model by [`crate::mesh`].

pub mod pck;

pub use pck::{Grammar, Group, GroupScanner, parse_pck_bytes, read_pck};
