//! # Linear and quadratic expressions
//!
//! Shared by the objective and constraint sections. An expression is read term by term, looking at
//! most four tokens ahead, until a token is found that can't continue it.
use crate::data::builder::Builder;
use crate::data::model::{Expression, LinearTerm, QuadraticTerm};
use crate::io::error::{Parse as ParseError, ParseResult};
use crate::io::lp::token::Token;

/// Read position within the tokens of a single section.
#[derive(Clone, Copy, Debug)]
pub(super) struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, position: 0 }
    }

    /// Tokens not yet read.
    pub(super) fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position..]
    }

    pub(super) fn advance(&mut self, count: usize) {
        debug_assert!(self.position + count <= self.tokens.len());

        self.position += count;
    }

    pub(super) fn is_done(&self) -> bool {
        self.position == self.tokens.len()
    }
}

/// Read an expression from the front of the cursor.
///
/// A leading constraint name names the expression. Reading stops at the first token that is not
/// part of a term; the cursor is left there.
///
/// # Arguments
///
/// * `cursor`: Positioned at the start of the expression, moved past it.
/// * `expression`: Receives the name, offset and terms.
/// * `builder`: Resolves variable names.
/// * `is_objective`: Whether this is the objective function, in which a quadratic group must be
/// followed by `/ 2`.
///
/// # Errors
///
/// When a quadratic group is malformed: a power other than 2, a missing closing bracket, or (in
/// the objective) a missing division by 2.
pub(super) fn parse_expression(
    cursor: &mut Cursor,
    expression: &mut Expression,
    builder: &mut Builder,
    is_objective: bool,
) -> ParseResult<()> {
    if let [Token::ConstraintName(name), ..] = cursor.remaining() {
        expression.name = Some(name.clone());
        cursor.advance(1);
    }

    loop {
        match cursor.remaining() {
            [Token::Constant(coefficient), Token::VariableName(name), ..] => {
                expression.linear_terms.push(LinearTerm {
                    coefficient: *coefficient,
                    variable: builder.variable_by_name(name),
                });
                cursor.advance(2);
            },
            [Token::Constant(value), ..] => {
                expression.offset += value;
                cursor.advance(1);
            },
            [Token::VariableName(name), ..] => {
                expression.linear_terms.push(LinearTerm {
                    coefficient: 1_f64,
                    variable: builder.variable_by_name(name),
                });
                cursor.advance(1);
            },
            [Token::BracketOpen, _, ..] => {
                cursor.advance(1);
                parse_quadratic_group(cursor, expression, builder)?;
                close_quadratic_group(cursor, is_objective)?;
            },
            _ => return Ok(()),
        }
    }
}

/// Read the terms between the brackets of a quadratic group.
fn parse_quadratic_group(
    cursor: &mut Cursor,
    expression: &mut Expression,
    builder: &mut Builder,
) -> ParseResult<()> {
    loop {
        let (coefficient, first, second, consumed) = match cursor.remaining() {
            [Token::Constant(coefficient), Token::VariableName(name), Token::Hat, Token::Constant(power), ..] => {
                check_square(*power)?;
                (*coefficient, name, name, 4)
            },
            [Token::VariableName(name), Token::Hat, Token::Constant(power), ..] => {
                check_square(*power)?;
                (1_f64, name, name, 3)
            },
            [Token::Constant(coefficient), Token::VariableName(first), Token::Asterisk, Token::VariableName(second), ..] => {
                (*coefficient, first, second, 4)
            },
            [Token::VariableName(first), Token::Asterisk, Token::VariableName(second), ..] => {
                (1_f64, first, second, 3)
            },
            _ => return Ok(()),
        };

        let variables = (builder.variable_by_name(first), builder.variable_by_name(second));
        expression.quadratic_terms.push(QuadraticTerm { coefficient, variables });
        cursor.advance(consumed);
    }
}

fn check_square(power: f64) -> ParseResult<()> {
    if power == 2_f64 {
        Ok(())
    } else {
        Err(ParseError::new(format!("Only squares are supported, found power {}.", power)))
    }
}

/// Read the closing bracket of a quadratic group, and in the objective, the division by two.
fn close_quadratic_group(cursor: &mut Cursor, is_objective: bool) -> ParseResult<()> {
    if is_objective {
        match cursor.remaining() {
            [Token::BracketClose, Token::Slash, Token::Constant(divisor), ..] if *divisor == 2_f64 => {
                cursor.advance(3);
                Ok(())
            },
            _ => Err(ParseError::new(
                "A quadratic group in the objective should end with \"] / 2\".",
            )),
        }
    } else {
        match cursor.remaining() {
            [Token::BracketClose, ..] => {
                cursor.advance(1);
                Ok(())
            },
            _ => Err(ParseError::new("A quadratic group should end with \"]\".")),
        }
    }
}
