//! # Data structures
//!
//! The in-memory representation of a problem read from a file.
pub mod builder;
pub mod model;
