//! Translating a model back into subsets and printing the result.

use std::io::{self, Write};

use itertools::Itertools;

use crate::{
    common::{Instance, Model},
    error::ReportError,
};

const RULE: &str = "##################################################################";
const TITLE: &str = "###########[ Human readable result of the exact cover ]###########";

/// The tokens of every subset selected by the model, ordered by subset position. The tokens of
/// each subset are sorted.
pub fn selected<'a>(instance: &'a Instance, model: &Model) -> Result<Vec<Vec<&'a str>>, ReportError> {
    model
        .true_vars()
        .into_iter()
        .map(|var| {
            instance
                .tokens(var)
                .map(|tokens| tokens.into_iter().sorted().collect())
                .ok_or(ReportError::UnknownVariable {
                    var,
                    subset_count: instance.subset_count(),
                })
        })
        .collect()
}

/// Check that the subsets selected by the model partition the ground set.
pub fn verify(instance: &Instance, model: &Model) -> Result<(), ReportError> {
    let mut counts = vec![0usize; instance.ground().len()];
    for var in model.true_vars() {
        let subset = instance
            .subset(var)
            .ok_or(ReportError::UnknownVariable {
                var,
                subset_count: instance.subset_count(),
            })?;
        for &element in &subset.elements {
            counts[element] += 1;
        }
    }

    let token = |element: usize| {
        instance
            .ground()
            .element(element)
            .unwrap_or_default()
            .to_string()
    };
    for (element, &count) in counts.iter().enumerate() {
        match count {
            1 => {}
            0 => return Err(ReportError::Uncovered(token(element))),
            count => {
                return Err(ReportError::Overcovered {
                    element: token(element),
                    count,
                })
            }
        }
    }
    Ok(())
}

/// Echo the solver output line by line.
pub fn echo(out: &mut impl Write, solver_output: &str) -> io::Result<()> {
    for line in solver_output.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the selected subsets in brace notation below a banner.
pub fn print_cover(out: &mut impl Write, selection: &[Vec<&str>]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Included sets: ")?;
    for subset in selection {
        writeln!(out, "{{{}}}", subset.iter().join(" "))?;
    }
    Ok(())
}
