//! # Building blocks of an optimization model
//!
//! Variables, expressions, constraints and special ordered sets, as read from a problem file.
//! Terms refer to variables by their index in `Model::variables`, such that every occurrence of a
//! name in the problem file shares a single `Variable`.
use std::collections::HashMap;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

/// Domain of a variable.
///
/// A semi-continuous variable is either zero, or lies within its bounds. A semi-integer variable
/// is additionally integer.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariableType {
    #[default]
    Continuous,
    Binary,
    General,
    SemiContinuous,
    SemiInteger,
}

/// A decision variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Unique within a model.
    pub name: String,
    /// May be `f64::NEG_INFINITY`.
    pub lower_bound: f64,
    /// May be `f64::INFINITY`.
    pub upper_bound: f64,
    #[allow(missing_docs)]
    pub variable_type: VariableType,
}

impl Variable {
    /// Create a continuous variable with bounds `[0, +inf)`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0_f64,
            upper_bound: f64::INFINITY,
            variable_type: VariableType::Continuous,
        }
    }
}

/// A coefficient times a variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTerm {
    #[allow(missing_docs)]
    pub coefficient: f64,
    /// Index into `Model::variables`.
    pub variable: usize,
}

/// A coefficient times the product of two, not necessarily distinct, variables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticTerm {
    #[allow(missing_docs)]
    pub coefficient: f64,
    /// Indices into `Model::variables`. Equal for a squared term.
    pub variables: (usize, usize),
}

/// A named sum of a constant, linear terms and quadratic terms.
///
/// Terms are kept in the order in which they were read; repeated variables are not merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    #[allow(missing_docs)]
    pub name: Option<String>,
    /// Sum of all constants read.
    pub offset: f64,
    #[allow(missing_docs)]
    pub linear_terms: Vec<LinearTerm>,
    /// When read from the objective function, these coefficients are as written between the
    /// brackets, that is, before the division by two.
    pub quadratic_terms: Vec<QuadraticTerm>,
}

/// A linear (or quadratic) row with a lower and an upper bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    #[allow(missing_docs)]
    pub expression: Expression,
    /// Defaults to `f64::NEG_INFINITY`.
    pub lower_bound: f64,
    /// Defaults to `f64::INFINITY`.
    pub upper_bound: f64,
}

impl Default for Constraint {
    fn default() -> Self {
        Self {
            expression: Expression::default(),
            lower_bound: f64::NEG_INFINITY,
            upper_bound: f64::INFINITY,
        }
    }
}

/// Kind of special ordered set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SosType {
    /// At most one variable in the set is nonzero.
    One,
    /// At most two variables in the set are nonzero, and they are adjacent.
    Two,
}

/// A special ordered set constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct Sos {
    #[allow(missing_docs)]
    pub name: String,
    #[allow(missing_docs)]
    pub sos_type: SosType,
    /// Variable index and weight, in the order read.
    pub entries: Vec<(usize, f64)>,
}

/// An optimization model as described by a problem file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    #[allow(missing_docs)]
    pub sense: ObjectiveSense,
    #[allow(missing_docs)]
    pub objective: Expression,
    #[allow(missing_docs)]
    pub constraints: Vec<Constraint>,
    #[allow(missing_docs)]
    pub sos: Vec<Sos>,
    /// In order of first reference.
    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl Model {
    pub(crate) fn from_parts(
        sense: ObjectiveSense,
        objective: Expression,
        constraints: Vec<Constraint>,
        sos: Vec<Sos>,
        variables: Vec<Variable>,
        index: HashMap<String, usize>,
    ) -> Self {
        debug_assert_eq!(variables.len(), index.len());
        debug_assert!(variables.iter().enumerate().all(|(i, variable)| index[&variable.name] == i));

        Self { sense, objective, constraints, sos, variables, index }
    }

    /// All variables, in order of first reference in the problem file.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Find a variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variable_index(name).map(|index| &self.variables[index])
    }

    /// Find the index of a variable by name.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the variable at an index that appears in a term or SOS entry.
    ///
    /// # Panics
    ///
    /// When the index is out of bounds.
    pub fn variable_name(&self, index: usize) -> &str {
        &self.variables[index].name
    }

    /// Whether any quadratic terms appear in the objective or the constraints.
    pub fn is_quadratic(&self) -> bool {
        !self.objective.quadratic_terms.is_empty()
            || self.constraints.iter().any(|constraint| !constraint.expression.quadratic_terms.is_empty())
    }
}
