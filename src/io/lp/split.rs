//! # Splitting tokens into sections
//!
//! Every section keyword starts a section that runs until the next keyword. Sections are kept as
//! ranges of positions into the flat token sequence.
use std::ops::Range;

use enum_map::EnumMap;
use log::trace;

use crate::io::error::{Parse as ParseError, ParseResult};
use crate::io::lp::token::{SectionKeyword, Token};

/// Where each section lies in the token sequence.
#[derive(Debug, Default, PartialEq)]
pub(super) struct Sections {
    /// Tokens before the first section keyword, if there are any.
    pub(super) preamble: Option<Range<usize>>,
    /// Contents of each section, excluding the keyword itself.
    ///
    /// A section that is absent, or present but empty, has no range.
    pub(super) ranges: EnumMap<SectionKeyword, Option<Range<usize>>>,
    /// Whether the keyword appeared, also when its section is empty.
    pub(super) present: EnumMap<SectionKeyword, bool>,
}

/// Cut the token sequence into sections.
///
/// # Errors
///
/// When a section keyword occurs more than once.
pub(super) fn split(tokens: &[Token]) -> ParseResult<Sections> {
    let mut sections = Sections::default();
    // Section being read and the position of its first token
    let mut open: Option<(SectionKeyword, usize)> = None;
    let mut seen_keyword = false;

    for (position, token) in tokens.iter().enumerate() {
        let &Token::Section(keyword) = token else { continue };

        if !seen_keyword && position > 0 {
            sections.preamble = Some(0..position);
        }
        seen_keyword = true;

        if let Some((previous, begin)) = open.take() {
            sections.ranges[previous] = Some(begin..position);
        }

        if sections.present[keyword] {
            return Err(ParseError::new(format!("Section {:?} appears more than once.", keyword)));
        }
        sections.present[keyword] = true;

        let next = position + 1;
        if matches!(tokens.get(next), None | Some(Token::Section(_))) {
            trace!("section {:?} is empty", keyword);
            continue;
        }
        open = Some((keyword, next));
    }

    if let Some((last, begin)) = open {
        sections.ranges[last] = Some(begin..tokens.len());
    }
    if !seen_keyword && !tokens.is_empty() {
        sections.preamble = Some(0..tokens.len());
    }

    for (keyword, range) in &sections.ranges {
        if let Some(range) = range {
            trace!("section {:?} spans tokens {:?}", keyword, range);
        }
    }

    Ok(sections)
}
