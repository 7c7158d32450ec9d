use fxhash::FxHashSet;

use super::Literal;

/// A satisfying assignment reported by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    literals: Vec<Literal>,
    true_vars: FxHashSet<usize>,
}

impl Model {
    pub fn new(literals: Vec<Literal>) -> Self {
        let true_vars = literals
            .iter()
            .filter(|lit| lit.is_positive())
            .map(|lit| lit.var())
            .collect();
        Model {
            literals,
            true_vars,
        }
    }

    /// The literals in the order the solver printed them.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_true(&self, var: usize) -> bool {
        self.true_vars.contains(&var)
    }

    /// The variables assigned true, ascending.
    pub fn true_vars(&self) -> Vec<usize> {
        let mut vars = self.true_vars.iter().copied().collect::<Vec<_>>();
        vars.sort_unstable();
        vars
    }
}
