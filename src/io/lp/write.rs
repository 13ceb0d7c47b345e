//! # Writing models as LP text
//!
//! The text is read back into the same model: variables are referenced in the same order, and
//! every variable appears in the bounds section. Two things can't be expressed. A constraint with
//! two different finite bounds is written as two rows, the second one with `_upper` appended to
//! its name. A semi-continuous type is lost when no variable is general, because the
//! semi-continuous section is then skipped on reading.
use std::fmt;

use itertools::Itertools;

use crate::data::model::{Constraint, Expression, Model, ObjectiveSense, SosType, VariableType};

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sense {
            ObjectiveSense::Minimize => writeln!(f, "minimize")?,
            ObjectiveSense::Maximize => writeln!(f, "maximize")?,
        }
        writeln!(f, " {}", ExpressionText { model: self, expression: &self.objective, is_objective: true })?;

        if !self.constraints.is_empty() {
            writeln!(f, "subject to")?;
            for constraint in &self.constraints {
                write_constraint(f, self, constraint)?;
            }
        }

        if !self.variables().is_empty() {
            writeln!(f, "bounds")?;
            for variable in self.variables() {
                if variable.lower_bound == f64::NEG_INFINITY && variable.upper_bound == f64::INFINITY {
                    writeln!(f, " {} free", variable.name)?;
                } else {
                    writeln!(f, " {} <= {} <= {}", variable.lower_bound, variable.name, variable.upper_bound)?;
                }
            }
        }

        let sections: [(&str, &[VariableType]); 3] = [
            ("general", &[VariableType::General, VariableType::SemiInteger]),
            ("binary", &[VariableType::Binary]),
            ("semi-continuous", &[VariableType::SemiContinuous, VariableType::SemiInteger]),
        ];
        for (keyword, types) in sections {
            let mut names = self.variables().iter()
                .filter(|variable| types.contains(&variable.variable_type))
                .map(|variable| &variable.name)
                .peekable();
            if names.peek().is_some() {
                writeln!(f, "{}", keyword)?;
                writeln!(f, " {}", names.join(" "))?;
            }
        }

        if !self.sos.is_empty() {
            writeln!(f, "sos")?;
            for sos in &self.sos {
                let sos_type = match sos.sos_type {
                    SosType::One => "S1",
                    SosType::Two => "S2",
                };
                let entries = sos.entries.iter()
                    .map(|&(variable, weight)| format!("{}:{}", self.variable_name(variable), weight))
                    .join(" ");
                writeln!(f, " {}: {}:: {}", sos.name, sos_type, entries)?;
            }
        }

        writeln!(f, "end")
    }
}

fn write_constraint(f: &mut fmt::Formatter<'_>, model: &Model, constraint: &Constraint) -> fmt::Result {
    let expression = ExpressionText { model, expression: &constraint.expression, is_objective: false };
    let (lower, upper) = (constraint.lower_bound, constraint.upper_bound);

    if lower == upper {
        writeln!(f, " {} = {}", expression, lower)
    } else if lower.is_finite() && upper.is_finite() {
        writeln!(f, " {} >= {}", expression, lower)?;
        let upper_row = Expression {
            name: constraint.expression.name.as_ref().map(|name| format!("{}_upper", name)),
            ..constraint.expression.clone()
        };
        writeln!(f, " {} <= {}", ExpressionText { expression: &upper_row, ..expression }, upper)
    } else if upper.is_finite() {
        writeln!(f, " {} <= {}", expression, upper)
    } else {
        writeln!(f, " {} >= {}", expression, lower)
    }
}

/// A term of an expression, by variable index.
#[derive(Clone, Copy)]
enum Term {
    Linear(usize),
    Square(usize),
    Product(usize, usize),
}

impl Term {
    /// Largest variable index in the term, then the smallest.
    ///
    /// Reading assigns indices in order of first reference, so writing terms in order of this key
    /// makes variables get the same indices when read again. A product sorts before a linear term
    /// on its larger variable, because its smaller variable may not have been referenced yet.
    fn key(self) -> (usize, usize) {
        match self {
            Term::Linear(variable) | Term::Square(variable) => (variable, variable),
            Term::Product(first, second) => (first.max(second), first.min(second)),
        }
    }

    fn is_quadratic(self) -> bool {
        !matches!(self, Term::Linear(_))
    }
}

#[derive(Clone, Copy)]
struct ExpressionText<'a> {
    model: &'a Model,
    expression: &'a Expression,
    is_objective: bool,
}

impl fmt::Display for ExpressionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |variable: usize| self.model.variable_name(variable);

        if let Some(name) = &self.expression.name {
            write!(f, "{}: ", name)?;
        }

        let linear = self.expression.linear_terms.iter()
            .map(|term| (term.coefficient, Term::Linear(term.variable)));
        let quadratic = self.expression.quadratic_terms.iter()
            .map(|term| match term.variables {
                (first, second) if first == second => (term.coefficient, Term::Square(first)),
                (first, second) => (term.coefficient, Term::Product(first, second)),
            });
        let groups = linear
            .merge_by(quadratic, |(_, left), (_, right)| left.key() <= right.key())
            .chunk_by(|(_, term)| term.is_quadratic());

        let mut leading = true;
        for (is_quadratic, terms) in &groups {
            if is_quadratic {
                if !leading {
                    write!(f, " + ")?;
                }
                write!(f, "[ ")?;
            }
            for (i, (coefficient, term)) in terms.enumerate() {
                write_coefficient(f, coefficient, if is_quadratic { i == 0 } else { leading })?;
                match term {
                    Term::Linear(variable) => write!(f, " {}", name(variable))?,
                    Term::Square(variable) => write!(f, " {} ^ 2", name(variable))?,
                    Term::Product(first, second) => write!(f, " {} * {}", name(first), name(second))?,
                }
                leading = false;
            }
            if is_quadratic {
                write!(f, " ]")?;
                if self.is_objective {
                    write!(f, " / 2")?;
                }
            }
        }

        if self.expression.offset != 0_f64 || leading {
            write_coefficient(f, self.expression.offset, leading)?;
        }

        Ok(())
    }
}

/// Write a number, with a separate sign if it doesn't lead the expression.
fn write_coefficient(f: &mut fmt::Formatter<'_>, value: f64, leading: bool) -> fmt::Result {
    if leading {
        write!(f, "{}", value)
    } else if value.is_sign_negative() {
        write!(f, " - {}", -value)
    } else {
        write!(f, " + {}", value)
    }
}

#[cfg(test)]
mod test {
    use crate::io::lp::parse;

    fn round_trip(text: &str) {
        let model = parse(text).unwrap();
        let written = model.to_string();
        assert_eq!(parse(&written).unwrap(), model, "written as:\n{}", written);
    }

    #[test]
    fn linear() {
        let model = parse("min\n obj: 2 x - 3 y + 4\nst\n c1: x + y <= 10\n - x >= -3\nbounds\n x <= 5\nend").unwrap();

        assert_eq!(model.to_string(), "\
minimize
 obj: 2 x - 3 y + 4
subject to
 c1: 1 x + 1 y <= 10
 -1 x >= -3
bounds
 0 <= x <= 5
 0 <= y <= inf
end
");
    }

    #[test]
    fn quadratic() {
        let model = parse("max\n [ x ^ 2 + 2 x * y ] / 2 + z\nst\n q: z + [ y ^ 2 ] <= 1\nend").unwrap();

        assert_eq!(model.to_string(), "\
maximize
 [ 1 x ^ 2 + 2 x * y ] / 2 + 1 z
subject to
 q: [ 1 y ^ 2 ] + 1 z <= 1
bounds
 0 <= x <= inf
 0 <= y <= inf
 0 <= z <= inf
end
");
    }

    #[test]
    fn product_before_linear_term_on_same_variable() {
        let model = parse("min\n x + [ z * w ] / 2 + w\nend").unwrap();
        let written = model.to_string();

        assert!(written.contains(" 1 x + [ 1 z * w ] / 2 + 1 w\n"), "written as:\n{}", written);
        let names = |model: &crate::data::model::Model| {
            model.variables().iter().map(|variable| variable.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&parse(&written).unwrap()), ["x", "z", "w"]);
    }

    #[test]
    fn ranged_constraint() {
        let mut model = parse("min\n x\nst\n r: x >= 1\nend").unwrap();
        model.constraints[0].upper_bound = 4_f64;

        let read = parse(&model.to_string()).unwrap();
        assert_eq!(read.constraints.len(), 2);
        assert_eq!(read.constraints[0].expression.name.as_deref(), Some("r"));
        assert_eq!(read.constraints[0].lower_bound, 1_f64);
        assert_eq!(read.constraints[1].expression.name.as_deref(), Some("r_upper"));
        assert_eq!(read.constraints[1].upper_bound, 4_f64);
    }

    #[test]
    fn reads_back() {
        round_trip("min\nst\n c: x <= 1\nend");
        round_trip("maximize\nend");
        round_trip("min\n obj: 3\nend");
        round_trip("min\n x + y\nst\n c: 0 x >= -inf\n e: x - y = 0\nbounds\n x free\n -inf <= y <= 3\nend");
        round_trip("min\n [ x * y ] / 2 + a + [ b ^ 2 ] / 2 + 7\nst\n [ c * x ] + d >= 1\nend");
        round_trip("min\n x + [ z * w ] / 2 + w\nend");
        round_trip("min\n x\nst\n y + [ z * y ] + z >= 1\nend");
        round_trip("min\n x + y + z + w\ngeneral\n x w\nbinary\n y\nsemi\n z w\nsos\n s1: S1:: x:1 y:2\n s2: S2:: v:-1\nend");
    }
}
