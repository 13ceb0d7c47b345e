//! # Reading and writing of linear and quadratic programs
//!
//! This module provides read and write functionality for the LP format. Writing is done through
//! the `Display` implementation of `Model`.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::data::model::Model;
use crate::io::error::Import;

pub mod error;
pub mod lp;

pub use lp::{parse, read};

/// Import a problem from a file.
///
/// With the `zlib` feature enabled, files with a `gz` extension are decompressed while reading.
///
/// # Arguments
///
/// * `file_path`: Location of an LP file.
///
/// # Errors
///
/// When the file cannot be found or read, or when its contents are not a valid LP problem.
pub fn import(file_path: &Path) -> Result<Model, Import> {
    let file = File::open(file_path)?;
    debug!("Reading problem from {:?}", file_path);

    let input: Box<dyn BufRead> = if is_compressed(file_path) {
        debug!("Decompressing while reading");
        decompress(file)
    } else {
        Box::new(BufReader::new(file))
    };

    lp::read(input)
}

fn is_compressed(file_path: &Path) -> bool {
    cfg!(feature = "zlib")
        && file_path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("gz"))
}

#[cfg(feature = "zlib")]
fn decompress(file: File) -> Box<dyn BufRead> {
    Box::new(BufReader::new(flate2::read::GzDecoder::new(file)))
}

#[cfg(not(feature = "zlib"))]
fn decompress(file: File) -> Box<dyn BufRead> {
    Box::new(BufReader::new(file))
}
