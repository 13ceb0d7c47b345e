//! # Reading linear and quadratic programs
//!
//! Problems written in the LP file format are read into a `Model`: an objective, constraints,
//! variable bounds and types, and special ordered sets. Models can be written back in the same
//! format.
#![warn(missing_docs)]

pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
