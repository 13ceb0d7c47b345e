//! # Reading of LP files
//!
//! The LP format is the human readable format used by CPLEX, Gurobi and HiGHS. A problem is
//! written down in sections, each started by a keyword:
//!
//! ```text
//! \ A small example
//! maximize
//!  obj: 3 x + 2 y + [ x ^ 2 + 2 x * y ] / 2
//! subject to
//!  c1: x + y <= 4
//!  c2: x + 3 y >= 2
//! bounds
//!  x <= 3
//!  y free
//! general
//!  y
//! end
//! ```
//!
//! Reading happens in stages. Lines are scanned into raw tokens, which are given their meaning by
//! looking a few tokens ahead. The resulting token sequence is cut into sections, and each
//! section is read by its own parser into a model.
use std::io::BufRead;

use log::debug;

use crate::data::builder::Builder;
use crate::data::model::Model;
use crate::io::error::Import;
use crate::io::lp::classify::classify;
use crate::io::lp::scan::Scanner;
use crate::io::lp::section::parse_sections;
use crate::io::lp::split::split;
use crate::io::lp::window::Window;

mod classify;
mod expression;
mod number;
mod scan;
mod section;
mod split;
mod token;
mod window;
mod write;

/// Read a model from a stream of LP text.
///
/// # Arguments
///
/// * `input`: Buffered source of the problem, read line by line.
///
/// # Return value
///
/// The complete model. Reading either fully succeeds or fails; there are no partial models.
///
/// # Errors
///
/// If the stream fails, or if the text doesn't follow the LP format.
pub fn read<R: BufRead>(input: R) -> Result<Model, Import> {
    let tokens = {
        let mut window = Window::new(Scanner::new(input))?;
        classify(&mut window)?
    };
    debug!("Read {} tokens", tokens.len());

    let sections = split(&tokens)?;
    let mut builder = Builder::new();
    parse_sections(&tokens, &sections, &mut builder)?;
    let model = builder.finish();
    debug!(
        "Read a model with {} variables, {} constraints and {} special ordered sets",
        model.variables().len(), model.constraints.len(), model.sos.len(),
    );

    Ok(model)
}

/// Read a model from LP text held in memory.
///
/// # Errors
///
/// If the text doesn't follow the LP format.
pub fn parse(program: &str) -> Result<Model, Import> {
    read(program.as_bytes())
}
