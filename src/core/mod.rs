//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Typed collection errors
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Path normalization utilities
//! - Source file reading strategies
//! - stderr diagnostics

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod report;
pub mod util;
