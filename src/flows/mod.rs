//! Flows module - The two aggregation tools
//!
//! Provides:
//! - folders: One summary per top-level folder plus the directory tree
//! - project: Whole-tree listing and markup content summary

pub mod folders;
pub mod project;
