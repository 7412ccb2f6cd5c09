//! Backends module - Filesystem traversal and tree rendering
//!
//! Provides:
//! - walk: Directory listing and recursive walks with walkdir
//! - tree: Connector-glyph directory tree rendering

pub mod tree;
pub mod walk;
