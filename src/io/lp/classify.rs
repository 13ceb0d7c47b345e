//! # Giving raw tokens their meaning
//!
//! The LP format has no fixed grammar at the level of raw tokens: "subject to" is one keyword
//! spelled as two words, `S1` is a constraint name in `S1: x >= 1` but a set type in `s: S1::`,
//! and a minus sign can be a coefficient on its own. This module resolves all of that by matching
//! the front of the lookahead window against a list of rules, in a fixed order. The first rule
//! that matches decides.
use std::io::BufRead;

use log::trace;

use crate::data::model::SosType;
use crate::io::error::{Import as ImportError, Parse as ParseError, ParseResult};
use crate::io::lp::token::{is_free, is_infinity, Comparison, RawToken, SectionKeyword, Token};
use crate::io::lp::window::Window;

/// Read the entire input into a flat sequence of processed tokens.
///
/// # Errors
///
/// If reading fails, or if the raw tokens at some point match none of the rules.
pub(super) fn classify<R: BufRead>(window: &mut Window<R>) -> Result<Vec<Token>, ImportError> {
    let mut tokens = Vec::new();

    while !window.at_end() {
        if is_comment_start(window) {
            skip_comment(window)?;
            continue;
        }

        let (token, consumed) = next_token([window.get(0), window.get(1), window.get(2)])?;
        trace!("token {}: {:?}", tokens.len(), token);
        tokens.push(token);
        window.advance(consumed)?;
    }

    Ok(tokens)
}

fn is_comment_start<R: BufRead>(window: &Window<R>) -> bool {
    matches!((window.get(0), window.get(1)), (RawToken::Slash, RawToken::Asterisk))
}

/// Skip a `/* ... */` comment, which may span lines.
///
/// The closing pair is searched one token at a time, such that it is found at any position; the
/// number of tokens inside the comment doesn't matter. An unterminated comment runs until the end
/// of the input.
fn skip_comment<R: BufRead>(window: &mut Window<R>) -> Result<(), ImportError> {
    window.advance(2)?;
    while !window.at_end()
        && !matches!((window.get(0), window.get(1)), (RawToken::Asterisk, RawToken::Slash)) {
        window.advance(1)?;
    }
    window.advance(2)
}

/// Classify the token at the front of the window.
///
/// # Arguments
///
/// * `raw`: The first three tokens of the window; no rule needs more.
///
/// # Return value
///
/// The processed token and the number of raw tokens it was made of.
///
/// # Errors
///
/// For a malformed SOS type marker, a bracket preceded by a minus sign or a constant, and any
/// token no rule applies to.
fn next_token(raw: [&RawToken; 3]) -> ParseResult<(Token, usize)> {
    let [first, second, third] = raw;

    if let RawToken::Text(text) = first {
        // Keywords spelled as two words
        if let (RawToken::Minus, RawToken::Text(next)) = (second, third) {
            if let Some(keyword) = SectionKeyword::from_text(&format!("{}-{}", text, next)) {
                return Ok((Token::Section(keyword), 3));
            }
        }
        if let RawToken::Text(next) = second {
            if let Some(keyword) = SectionKeyword::from_text(&format!("{} {}", text, next)) {
                return Ok((Token::Section(keyword), 2));
            }
        }

        if let Some(keyword) = SectionKeyword::from_text(text) {
            return Ok((Token::Section(keyword), 1));
        }

        return Ok(match (second, third) {
            (RawToken::Colon, RawToken::Colon) => (Token::SosType(sos_type(text)?), 3),
            (RawToken::Colon, _) => (Token::ConstraintName(text.clone()), 2),
            _ if is_free(text) => (Token::Free, 1),
            _ if is_infinity(text) => (Token::Constant(f64::INFINITY), 1),
            _ => (Token::VariableName(text.clone()), 1),
        });
    }

    match (first, constant_value(second)) {
        // Unary plus is a no-op
        (RawToken::Plus, Some(value)) => return Ok((Token::Constant(value), 2)),
        (RawToken::Minus, Some(value)) => return Ok((Token::Constant(-value), 2)),
        _ => {},
    }

    Ok(match (first, second) {
        (RawToken::Plus, RawToken::BracketOpen) => (Token::BracketOpen, 2),
        (RawToken::Minus | RawToken::Constant(_), RawToken::BracketOpen) => return Err(ParseError::new(
            "A quadratic group can't be negated or multiplied by a constant.",
        )),
        (RawToken::Plus, _) => (Token::Constant(1_f64), 1),
        (RawToken::Minus, _) => (Token::Constant(-1_f64), 1),
        (&RawToken::Constant(value), _) => (Token::Constant(value), 1),
        (RawToken::BracketOpen, _) => (Token::BracketOpen, 1),
        (RawToken::BracketClose, _) => (Token::BracketClose, 1),
        (RawToken::Slash, _) => (Token::Slash, 1),
        (RawToken::Asterisk, _) => (Token::Asterisk, 1),
        (RawToken::Hat, _) => (Token::Hat, 1),
        (RawToken::Less, RawToken::Equal) => (Token::Comparison(Comparison::LessOrEqual), 2),
        (RawToken::Less, _) => (Token::Comparison(Comparison::Less), 1),
        (RawToken::Greater, RawToken::Equal) => (Token::Comparison(Comparison::GreaterOrEqual), 2),
        (RawToken::Greater, _) => (Token::Comparison(Comparison::Greater), 1),
        (RawToken::Equal, _) => (Token::Comparison(Comparison::Equal), 1),
        (RawToken::Colon | RawToken::EndOfFile | RawToken::Text(_), _) => return Err(ParseError::new(
            format!("Unexpected token {:?} followed by {:?}.", first, second),
        )),
    })
}

/// Value of a raw token that can follow a sign.
///
/// Next to numbers, this is the spelling of infinity, such that `-inf` is negative infinity.
fn constant_value(token: &RawToken) -> Option<f64> {
    match token {
        &RawToken::Constant(value) => Some(value),
        RawToken::Text(text) if is_infinity(text) => Some(f64::INFINITY),
        _ => None,
    }
}

/// Read the type of a special ordered set from a marker like `S1` or `s2`.
fn sos_type(text: &str) -> ParseResult<SosType> {
    match text.as_bytes() {
        [b'S' | b's', b'1'] => Ok(SosType::One),
        [b'S' | b's', b'2'] => Ok(SosType::Two),
        _ => Err(ParseError::new(format!("SOS type marker \"{}\" is not S1 or S2.", text))),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::data::model::SosType;
    use crate::io::lp::classify::classify;
    use crate::io::lp::scan::Scanner;
    use crate::io::lp::token::{Comparison, SectionKeyword, Token};
    use crate::io::lp::window::Window;

    fn tokens(text: &str) -> Vec<Token> {
        try_tokens(text).unwrap()
    }

    fn try_tokens(text: &str) -> Result<Vec<Token>, crate::io::error::Import> {
        let mut window = Window::new(Scanner::new(Cursor::new(text)))?;
        classify(&mut window)
    }

    fn variable(name: &str) -> Token {
        Token::VariableName(name.to_string())
    }

    #[test]
    fn multi_word_keywords() {
        assert_eq!(tokens("Subject To"), vec![Token::Section(SectionKeyword::Constraints)]);
        assert_eq!(tokens("such\nthat"), vec![Token::Section(SectionKeyword::Constraints)]);
        assert_eq!(tokens("s.t."), vec![Token::Section(SectionKeyword::Constraints)]);
        assert_eq!(tokens("SEMI-CONTINUOUS"), vec![Token::Section(SectionKeyword::SemiContinuous)]);
        assert_eq!(tokens("MAXIMIZE max"), vec![
            Token::Section(SectionKeyword::Maximize), Token::Section(SectionKeyword::Maximize),
        ]);
    }

    #[test]
    fn hyphenated_names_are_not_keywords() {
        assert_eq!(tokens("x - y"), vec![variable("x"), Token::Constant(-1_f64), variable("y")]);
        assert_eq!(tokens("subject x"), vec![variable("subject"), variable("x")]);
    }

    #[test]
    fn names() {
        assert_eq!(tokens("c1: x"), vec![Token::ConstraintName("c1".to_string()), variable("x")]);
        assert_eq!(tokens("S1: x"), vec![Token::ConstraintName("S1".to_string()), variable("x")]);
    }

    #[test]
    fn sos_type() {
        assert_eq!(tokens("s1: S1:: x1:1"), vec![
            Token::ConstraintName("s1".to_string()),
            Token::SosType(SosType::One),
            Token::ConstraintName("x1".to_string()),
            Token::Constant(1_f64),
        ]);
        assert_eq!(tokens("s2 ::"), vec![Token::SosType(SosType::Two)]);
        assert!(try_tokens("S3::").is_err());
        assert!(try_tokens("T1::").is_err());
        assert!(try_tokens("S12::").is_err());
    }

    #[test]
    fn reserved_words() {
        assert_eq!(tokens("x free"), vec![variable("x"), Token::Free]);
        assert_eq!(tokens("infinity"), vec![Token::Constant(f64::INFINITY)]);
        assert_eq!(tokens("-inf"), vec![Token::Constant(f64::NEG_INFINITY)]);
        assert_eq!(tokens("+ INF"), vec![Token::Constant(f64::INFINITY)]);
    }

    #[test]
    fn signs() {
        assert_eq!(tokens("+ 3 - 4"), vec![Token::Constant(3_f64), Token::Constant(-4_f64)]);
        assert_eq!(tokens("- x + y"), vec![
            Token::Constant(-1_f64), variable("x"), Token::Constant(1_f64), variable("y"),
        ]);
        assert_eq!(tokens("2 x"), vec![Token::Constant(2_f64), variable("x")]);
    }

    #[test]
    fn brackets() {
        assert_eq!(tokens("+ [ x * y ] / 2"), vec![
            Token::BracketOpen, variable("x"), Token::Asterisk, variable("y"),
            Token::BracketClose, Token::Slash, Token::Constant(2_f64),
        ]);
        assert_eq!(tokens("[ x ^ 2 ]"), vec![
            Token::BracketOpen, variable("x"), Token::Hat, Token::Constant(2_f64), Token::BracketClose,
        ]);
        assert!(try_tokens("- [ x ^ 2 ]").is_err());
        assert!(try_tokens("3 [ x ^ 2 ]").is_err());
    }

    #[test]
    fn comparisons() {
        assert_eq!(tokens("< <= = >= >"), vec![
            Token::Comparison(Comparison::Less),
            Token::Comparison(Comparison::LessOrEqual),
            Token::Comparison(Comparison::Equal),
            Token::Comparison(Comparison::GreaterOrEqual),
            Token::Comparison(Comparison::Greater),
        ]);
        assert_eq!(tokens("x>=2"), vec![
            variable("x"), Token::Comparison(Comparison::GreaterOrEqual), Token::Constant(2_f64),
        ]);
    }

    #[test]
    fn block_comments() {
        assert_eq!(tokens("x /* a comment */ y"), vec![variable("x"), variable("y")]);
        assert_eq!(tokens("x /* one */ y"), vec![variable("x"), variable("y")]);
        // Odd and even numbers of tokens inside
        assert_eq!(tokens("x /* a b c */ y"), vec![variable("x"), variable("y")]);
        assert_eq!(tokens("x /* a b c d */ y"), vec![variable("x"), variable("y")]);
        assert_eq!(tokens("x /* spans\n two lines */ y"), vec![variable("x"), variable("y")]);
        assert_eq!(tokens("x /**/ y"), vec![variable("x"), variable("y")]);
        assert_eq!(tokens("x /* never closed"), vec![variable("x")]);
    }

    #[test]
    fn stray_colon() {
        assert!(try_tokens(": x").is_err());
        assert!(try_tokens("min:").is_err());
    }

    #[test]
    fn empty() {
        assert_eq!(tokens(""), vec![]);
        assert_eq!(tokens("\\ nothing here"), vec![]);
    }
}
