//! Backends module - File system operations
//!
//! Provides:
//! - scan: Source enumeration with walkdir

pub mod scan;
