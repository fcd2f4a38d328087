//! Services layer - business operations and utilities.
//!
//! - Document file I/O
//! - Text search

pub mod file_ops;
pub mod text_ops;
