//! # Lookahead over raw tokens
//!
//! Keywords and other constructs span up to five raw tokens. The window keeps exactly that many
//! tokens buffered, so the reclassifier can match on them without scanning twice.
use std::collections::VecDeque;
use std::io::BufRead;

use crate::io::error::Import as ImportError;
use crate::io::lp::scan::Scanner;
use crate::io::lp::token::RawToken;

/// Number of raw tokens that can be inspected at once.
pub(super) const WIDTH: usize = 5;

/// Sliding window of the next `WIDTH` raw tokens.
pub(super) struct Window<R> {
    scanner: Scanner<R>,
    tokens: VecDeque<RawToken>,
}

impl<R: BufRead> Window<R> {
    /// Fill the window from the start of the input.
    ///
    /// When the input is shorter than the window, the remaining positions hold
    /// `RawToken::EndOfFile`.
    pub(super) fn new(scanner: Scanner<R>) -> Result<Self, ImportError> {
        let mut window = Self { scanner, tokens: VecDeque::with_capacity(WIDTH) };
        while window.tokens.len() < WIDTH {
            let token = window.read()?;
            window.tokens.push_back(token);
        }

        Ok(window)
    }

    /// Token `offset` positions ahead of the current one.
    ///
    /// # Panics
    ///
    /// When `offset` is not smaller than `WIDTH`.
    pub(super) fn get(&self, offset: usize) -> &RawToken {
        assert!(offset < WIDTH, "lookahead of {} exceeds the window", offset);
        &self.tokens[offset]
    }

    /// Move the window `count` tokens forward.
    pub(super) fn advance(&mut self, count: usize) -> Result<(), ImportError> {
        debug_assert!(count > 0);

        for _ in 0..count {
            let token = self.read()?;
            self.tokens.pop_front();
            self.tokens.push_back(token);
        }

        Ok(())
    }

    /// Whether the current token is the end of the input.
    pub(super) fn at_end(&self) -> bool {
        *self.get(0) == RawToken::EndOfFile
    }

    /// Next real token from the scanner, skipping the "nothing read" signals.
    fn read(&mut self) -> Result<RawToken, ImportError> {
        loop {
            if let Some(token) = self.scanner.next()? {
                return Ok(token);
            }
        }
    }
}
