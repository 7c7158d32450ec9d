//! Reduction of exact cover to CNF.
//!
//! Every subset gets one variable. For every ground set element the formula demands that at least
//! one subset containing it is selected (coverage) and that no two of them are selected together
//! (exclusivity, pairwise encoding).

use itertools::Itertools;

use crate::{
    common::{Formula, Literal, OccurrenceIndex},
    error::EncodeError,
};

/// Build the exact cover formula over `subset_count` variables.
///
/// All coverage clauses come first, one per element in element order, followed by the
/// exclusivity clauses. An element without occurrences yields the empty clause.
pub fn encode(occurrences: &OccurrenceIndex, subset_count: usize) -> Result<Formula, EncodeError> {
    if i32::try_from(subset_count).is_err() {
        return Err(EncodeError::TooManySubsets(subset_count));
    }
    for (element, positions) in occurrences.iter().enumerate() {
        if let Some(&position) = positions
            .iter()
            .find(|&&p| p == 0 || p > subset_count)
        {
            return Err(EncodeError::PositionOutOfRange {
                element,
                position,
                subset_count,
            });
        }
    }

    let mut formula = Formula::new(subset_count);
    for positions in occurrences.iter() {
        formula.add_clause(positions.iter().map(|&p| literal(p)));
    }
    let coverage = formula.number_of_clauses();

    for positions in occurrences.iter() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            formula.add_clause([-literal(a), -literal(b)]);
        }
    }
    tracing::debug!(
        "encoded {} coverage and {} exclusivity clauses",
        coverage,
        formula.number_of_clauses() - coverage
    );

    Ok(formula)
}

// positions are range checked against an i32 sized subset count before this is called
fn literal(position: usize) -> Literal {
    Literal::from(position as i32)
}
