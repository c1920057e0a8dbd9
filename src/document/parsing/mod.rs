//! Specialized parsing and decoding modules
//!
//! Each module handles one stage of the extraction pipeline.

pub mod metadata;
pub mod payload;
pub mod tree;
pub mod xml;
