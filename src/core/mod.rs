//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Configuration with documented defaults
//! - Fatal error types
//! - Data model (FileRecord, RunReport)
//! - Rendering of run reports
//! - Path normalization utilities
//! - File reading

pub mod config;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
