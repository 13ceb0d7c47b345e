//! # Reading the contents of each section
//!
//! Every section kind has its own small grammar. The sections are processed in a fixed order,
//! independent of the order in which they appear in the file: objective, constraints, bounds,
//! general, binary, semi-continuous and finally special ordered sets.
use log::{debug, warn};

use crate::data::builder::Builder;
use crate::data::model::{Constraint, Expression, ObjectiveSense, Sos, VariableType};
use crate::io::error::{Parse as ParseError, ParseResult};
use crate::io::lp::expression::{parse_expression, Cursor};
use crate::io::lp::split::Sections;
use crate::io::lp::token::{Comparison, SectionKeyword, Token};

/// Build the model from the token sequence, section by section.
///
/// # Arguments
///
/// * `tokens`: All processed tokens of the file.
/// * `sections`: Ranges into `tokens`.
/// * `builder`: Collects the model.
///
/// # Errors
///
/// If any section doesn't follow its grammar, if there are tokens before the first section, or
/// after the end keyword.
pub(super) fn parse_sections(
    tokens: &[Token],
    sections: &Sections,
    builder: &mut Builder,
) -> ParseResult<()> {
    if sections.preamble.is_some() {
        return Err(ParseError::new("Found tokens before the first section keyword."));
    }

    parse_objective(tokens, sections, builder)
        .map_err(|e| e.wrap("Could not read the objective."))?;
    if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::Constraints) {
        parse_constraints(&mut cursor, builder)
            .map_err(|e| e.wrap("Could not read the constraints section."))?;
    }
    if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::Bounds) {
        parse_bounds(&mut cursor, builder)
            .map_err(|e| e.wrap("Could not read the bounds section."))?;
    }
    if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::General) {
        parse_general(&mut cursor, builder)
            .map_err(|e| e.wrap("Could not read the general section."))?;
    }
    if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::Binary) {
        parse_binary(&mut cursor, builder)
            .map_err(|e| e.wrap("Could not read the binary section."))?;
    }
    // Only read when a general section is there as well
    if sections.ranges[SectionKeyword::General].is_some() {
        if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::SemiContinuous) {
            parse_semi_continuous(&mut cursor, builder)
                .map_err(|e| e.wrap("Could not read the semi-continuous section."))?;
        }
    } else if sections.ranges[SectionKeyword::SemiContinuous].is_some() {
        warn!("Semi-continuous section is ignored, because there is no general section.");
    }
    if let Some(mut cursor) = section_cursor(tokens, sections, SectionKeyword::Sos) {
        parse_sos(&mut cursor, builder)
            .map_err(|e| e.wrap("Could not read the SOS section."))?;
    }

    if sections.ranges[SectionKeyword::End].is_some() {
        return Err(ParseError::new("Found tokens after the end keyword."));
    }

    Ok(())
}

fn section_cursor<'a>(tokens: &'a [Token], sections: &Sections, keyword: SectionKeyword) -> Option<Cursor<'a>> {
    sections.ranges[keyword].clone().map(|range| Cursor::new(&tokens[range]))
}

/// Set the direction of optimization and read the objective function.
///
/// The objective is read from the minimize or the maximize section, whichever has content. An
/// objective section without tokens counts as absent; when both have content, that's an error.
fn parse_objective(tokens: &[Token], sections: &Sections, builder: &mut Builder) -> ParseResult<()> {
    let minimize = section_cursor(tokens, sections, SectionKeyword::Minimize);
    let maximize = section_cursor(tokens, sections, SectionKeyword::Maximize);
    let (sense, mut cursor) = match (minimize, maximize) {
        (Some(_), Some(_)) => return Err(ParseError::new("Both a minimize and a maximize section are present.")),
        (Some(cursor), None) => (ObjectiveSense::Minimize, cursor),
        (None, Some(cursor)) => (ObjectiveSense::Maximize, cursor),
        (None, None) => {
            debug!("No objective, minimizing zero.");
            return Ok(());
        },
    };

    let mut objective = Expression::default();
    parse_expression(&mut cursor, &mut objective, builder, true)?;
    if !cursor.is_done() {
        return Err(ParseError::new(format!(
            "Objective function can't contain {:?}.", cursor.remaining()[0],
        )));
    }
    builder.sense = sense;
    builder.objective = objective;

    Ok(())
}

/// Read rows of the form `name: expression comparison constant`.
fn parse_constraints(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    while !cursor.is_done() {
        let mut constraint = Constraint::default();
        parse_expression(cursor, &mut constraint.expression, builder, false)?;

        match cursor.remaining() {
            [Token::Comparison(comparison), Token::Constant(value), ..] => {
                match comparison {
                    Comparison::Equal => {
                        constraint.lower_bound = *value;
                        constraint.upper_bound = *value;
                    },
                    Comparison::LessOrEqual => constraint.upper_bound = *value,
                    Comparison::GreaterOrEqual => constraint.lower_bound = *value,
                    Comparison::Less | Comparison::Greater => return Err(ParseError::new(format!(
                        "Strict comparison {:?} is not supported in a constraint.", comparison,
                    ))),
                }
                cursor.advance(2);
            },
            [Token::Comparison(_), ..] => return Err(ParseError::new(
                "Expected a constant right-hand side after the comparison.",
            )),
            [token, ..] => return Err(ParseError::new(format!(
                "Expected a comparison after the constraint expression, found {:?}.", token,
            ))),
            [] => return Err(ParseError::new("Constraint ended without a comparison.")),
        }

        builder.constraints.push(constraint);
    }

    Ok(())
}

/// Read statements `x free`, `l <= x <= u`, `c cmp x` and `x cmp c`.
fn parse_bounds(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    while !cursor.is_done() {
        match cursor.remaining() {
            [Token::VariableName(name), Token::Free, ..] => {
                let variable = builder.variable_mut(name);
                variable.lower_bound = f64::NEG_INFINITY;
                variable.upper_bound = f64::INFINITY;
                cursor.advance(2);
            },
            [
                Token::Constant(left), Token::Comparison(first), Token::VariableName(name),
                Token::Comparison(second), Token::Constant(right), ..
            ] => {
                let (lower, upper) = match (first, second) {
                    (Comparison::LessOrEqual, Comparison::LessOrEqual) => (*left, *right),
                    (Comparison::GreaterOrEqual, Comparison::GreaterOrEqual) => (*right, *left),
                    _ => return Err(ParseError::new(format!(
                        "Comparisons {:?} and {:?} don't form a range for variable \"{}\".", first, second, name,
                    ))),
                };
                let variable = builder.variable_mut(name);
                variable.lower_bound = lower;
                variable.upper_bound = upper;
                cursor.advance(5);
            },
            [Token::Constant(value), Token::Comparison(comparison), Token::VariableName(name), ..] => {
                let variable = builder.variable_mut(name);
                match non_strict(*comparison)? {
                    Comparison::LessOrEqual => variable.lower_bound = *value,
                    Comparison::GreaterOrEqual => variable.upper_bound = *value,
                    _ => {
                        variable.lower_bound = *value;
                        variable.upper_bound = *value;
                    },
                }
                cursor.advance(3);
            },
            [Token::VariableName(name), Token::Comparison(comparison), Token::Constant(value), ..] => {
                let variable = builder.variable_mut(name);
                match non_strict(*comparison)? {
                    Comparison::LessOrEqual => variable.upper_bound = *value,
                    Comparison::GreaterOrEqual => variable.lower_bound = *value,
                    _ => {
                        variable.lower_bound = *value;
                        variable.upper_bound = *value;
                    },
                }
                cursor.advance(3);
            },
            remaining => return Err(ParseError::new(format!(
                "Can't read a bound starting at {:?}.", remaining[0],
            ))),
        }
    }

    Ok(())
}

fn non_strict(comparison: Comparison) -> ParseResult<Comparison> {
    if comparison.is_strict() {
        Err(ParseError::new(format!("Strict comparison {:?} is not supported in a bound.", comparison)))
    } else {
        Ok(comparison)
    }
}

/// Variables listed in a section that contains nothing else.
fn variable_names<'a>(cursor: &mut Cursor<'a>) -> ParseResult<Vec<&'a str>> {
    let mut names = Vec::with_capacity(cursor.remaining().len());
    while let [token, ..] = cursor.remaining() {
        match token {
            Token::VariableName(name) => names.push(name.as_str()),
            other => return Err(ParseError::new(format!("Expected a variable name, found {:?}.", other))),
        }
        cursor.advance(1);
    }

    Ok(names)
}

fn parse_binary(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    for name in variable_names(cursor)? {
        let variable = builder.variable_mut(name);
        variable.variable_type = VariableType::Binary;
        variable.lower_bound = 0_f64;
        variable.upper_bound = 1_f64;
    }

    Ok(())
}

fn parse_general(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    for name in variable_names(cursor)? {
        let variable = builder.variable_mut(name);
        variable.variable_type = match variable.variable_type {
            VariableType::SemiContinuous => VariableType::SemiInteger,
            _ => VariableType::General,
        };
    }

    Ok(())
}

fn parse_semi_continuous(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    for name in variable_names(cursor)? {
        let variable = builder.variable_mut(name);
        variable.variable_type = match variable.variable_type {
            VariableType::General => VariableType::SemiInteger,
            _ => VariableType::SemiContinuous,
        };
    }

    Ok(())
}

/// Read sets of the form `name: S1:: x1:1 x2:2`.
///
/// Because every variable is followed by a colon, variables are read as constraint names.
fn parse_sos(cursor: &mut Cursor, builder: &mut Builder) -> ParseResult<()> {
    while !cursor.is_done() {
        let name = match cursor.remaining() {
            [Token::ConstraintName(name), ..] => name.clone(),
            remaining => return Err(ParseError::new(format!(
                "Expected the name of a set, found {:?}.", remaining[0],
            ))),
        };
        cursor.advance(1);

        let sos_type = match cursor.remaining() {
            [Token::SosType(sos_type), ..] => *sos_type,
            _ => return Err(ParseError::new(format!("Expected the type of set \"{}\".", name))),
        };
        cursor.advance(1);

        let mut entries = Vec::new();
        while let [Token::ConstraintName(variable), Token::Constant(weight), ..] = cursor.remaining() {
            entries.push((builder.variable_by_name(variable), *weight));
            cursor.advance(2);
        }

        builder.sos.push(Sos { name, sos_type, entries });
    }

    Ok(())
}
