//! # Assembling a model
//!
//! Section parsers only know variables by name. The `Builder` hands out a single index per
//! distinct name, creating the variable on first reference, and collects everything else that
//! ends up in the `Model`.
use std::collections::HashMap;

use crate::data::model::{Constraint, Expression, Model, ObjectiveSense, Sos, Variable};

/// Model under construction.
#[derive(Debug, Default)]
pub struct Builder {
    /// Direction of optimization, minimize unless a maximize section is read.
    pub sense: ObjectiveSense,
    #[allow(missing_docs)]
    pub objective: Expression,
    #[allow(missing_docs)]
    pub constraints: Vec<Constraint>,
    #[allow(missing_docs)]
    pub sos: Vec<Sos>,

    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the variable with this name.
    ///
    /// A variable that is not yet known is created with bounds `[0, +inf)` and continuous type.
    ///
    /// # Arguments
    ///
    /// * `name`: Variable name as it appears in the problem file.
    ///
    /// # Return value
    ///
    /// The same index for every call with the same name.
    pub fn variable_by_name(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index.get(name) {
            return index;
        }

        let index = self.variables.len();
        self.variables.push(Variable::new(name));
        self.index.insert(name.to_string(), index);

        index
    }

    /// Mutable access to the variable with this name, creating it if needed.
    pub fn variable_mut(&mut self, name: &str) -> &mut Variable {
        let index = self.variable_by_name(name);
        &mut self.variables[index]
    }

    /// Number of distinct variables seen so far.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Hand over the finished model.
    pub fn finish(self) -> Model {
        let Self { sense, objective, constraints, sos, variables, index } = self;

        Model::from_parts(sense, objective, constraints, sos, variables, index)
    }
}
