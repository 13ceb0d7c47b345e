//! # Scanning lines into raw tokens
//!
//! The scanner holds a single line of the input at a time and cuts raw tokens off its front.
use std::io::BufRead;

use crate::io::error::{Import as ImportError, Parse as ParseError};
use crate::io::lp::number;
use crate::io::lp::token::RawToken;

/// Characters that end an identifier.
///
/// Brackets are not among them: in `[x^2]`, the text `x` ends at the hat, but in `x]` the bracket
/// is part of the name.
const DELIMITERS: &[char] = &['\t', '\n', '\\', ':', '+', '<', '>', '^', '=', ' ', '/', '-', '*', ';'];

/// Produces raw tokens from a line-oriented character stream.
pub(super) struct Scanner<R> {
    input: R,
    line: String,
    position: usize,
    exhausted: bool,
}

impl<R: BufRead> Scanner<R> {
    pub(super) fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            position: 0,
            exhausted: false,
        }
    }

    /// Try to read the next raw token.
    ///
    /// # Return value
    ///
    /// `None` if only whitespace, a comment or an empty line was skipped; the caller should try
    /// again. Once the input is exhausted, `RawToken::EndOfFile` on every call.
    ///
    /// # Errors
    ///
    /// When the underlying stream fails, or when a character can't be read as the start of any
    /// token.
    pub(super) fn next(&mut self) -> Result<Option<RawToken>, ImportError> {
        if self.position == self.line.len() {
            if self.exhausted {
                return Ok(Some(RawToken::EndOfFile));
            }

            self.line.clear();
            self.position = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                self.exhausted = true;
                return Ok(Some(RawToken::EndOfFile));
            }
            if self.line.ends_with('\n') {
                self.line.pop();
            }
            if self.line.ends_with('\r') {
                self.line.pop();
            }

            if self.line.is_empty() {
                return Ok(None);
            }
        }

        let rest = &self.line[self.position..];
        let single = match rest.as_bytes()[0] {
            // Comment, or end of statement: nothing else on this line matters
            b'\\' | b';' => {
                self.position = self.line.len();
                return Ok(None);
            },
            b' ' | b'\t' => {
                self.position += 1;
                return Ok(None);
            },
            b'[' => Some(RawToken::BracketOpen),
            b']' => Some(RawToken::BracketClose),
            b'<' => Some(RawToken::Less),
            b'>' => Some(RawToken::Greater),
            b'=' => Some(RawToken::Equal),
            b':' => Some(RawToken::Colon),
            b'+' => Some(RawToken::Plus),
            b'-' => Some(RawToken::Minus),
            b'^' => Some(RawToken::Hat),
            b'/' => Some(RawToken::Slash),
            b'*' => Some(RawToken::Asterisk),
            _ => None,
        };
        if let Some(token) = single {
            self.position += 1;
            return Ok(Some(token));
        }

        if let Some((value, length)) = number::scan(rest)? {
            self.position += length;
            return Ok(Some(RawToken::Constant(value)));
        }

        let length = rest.find(DELIMITERS).unwrap_or(rest.len());
        if length > 0 {
            let text = rest[..length].to_string();
            self.position += length;
            return Ok(Some(RawToken::Text(text)));
        }

        Err(ParseError::new(format!("Unrecognized character in \"{}\".", rest)).into())
    }
}
