use std::{
    fs::File,
    io::{self, BufWriter, Write},
    ops::Range,
    path::Path,
};

use itertools::Itertools;

use super::Literal;

/// A formula in conjunctive normal form over the variables `1..=vars`.
///
/// All literals live in one flat vector, every clause is a range into it. Clauses keep the order
/// they were added in so the DIMACS output is stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Formula {
    vars: usize,
    literals: Vec<Literal>,
    ranges: Vec<Range<usize>>,
}

impl Formula {
    pub fn new(vars: usize) -> Self {
        Formula {
            vars,
            ..Default::default()
        }
    }

    pub fn vars(&self) -> usize {
        self.vars
    }

    // how many clauses are in the formula?
    pub fn number_of_clauses(&self) -> usize {
        self.ranges.len()
    }

    /// Add a new clause containing the specified literals. The clause may be empty.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = Literal>) {
        let start = self.literals.len();
        self.literals.extend(literals);
        let end = self.literals.len();
        self.ranges.push(start..end);
    }

    /// Get the literals of the clause at `index`.
    pub fn clause(&self, index: usize) -> &[Literal] {
        let range = self.ranges[index].clone();
        &self.literals[range]
    }

    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> + '_ {
        self.ranges
            .iter()
            .map(|range| &self.literals[range.start..range.end])
    }

    /// Check whether the formula holds when exactly the variables for which `is_true` returns
    /// true are assigned true.
    pub fn is_satisfied_by(&self, is_true: impl Fn(usize) -> bool) -> bool {
        self.clauses().all(|clause| {
            clause
                .iter()
                .any(|lit| is_true(lit.var()) == lit.is_positive())
        })
    }

    /// Write the formula in DIMACS format.
    pub fn write_dimacs(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "p cnf {} {}", self.vars, self.number_of_clauses())?;
        for clause in self.clauses() {
            if clause.is_empty() {
                writeln!(out, "0")?;
            } else {
                writeln!(out, "{} 0", clause.iter().join(" "))?;
            }
        }
        Ok(())
    }

    /// Write the formula in DIMACS format to a file, replacing it if it exists.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_dimacs(&mut out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(raw: &[i32]) -> Vec<Literal> {
        raw.iter().map(|&i| Literal::from(i)).collect()
    }

    #[test]
    fn dimacs_output() {
        let mut formula = Formula::new(3);
        formula.add_clause(lits(&[1, 3]));
        formula.add_clause(lits(&[]));
        formula.add_clause(lits(&[-1, -3]));

        let mut out = Vec::new();
        formula.write_dimacs(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "p cnf 3 3\n1 3 0\n0\n-1 -3 0\n"
        );
    }

    #[test]
    fn clauses_keep_insertion_order() {
        let mut formula = Formula::new(2);
        formula.add_clause(lits(&[2]));
        formula.add_clause(lits(&[1, -2]));
        assert_eq!(formula.number_of_clauses(), 2);
        assert_eq!(formula.clause(0), lits(&[2]).as_slice());
        assert_eq!(formula.clause(1), lits(&[1, -2]).as_slice());
    }

    #[test]
    fn satisfaction() {
        let mut formula = Formula::new(2);
        formula.add_clause(lits(&[1, 2]));
        formula.add_clause(lits(&[-1, -2]));
        assert!(formula.is_satisfied_by(|v| v == 1));
        assert!(formula.is_satisfied_by(|v| v == 2));
        assert!(!formula.is_satisfied_by(|_| true));
        assert!(!formula.is_satisfied_by(|_| false));

        formula.add_clause(lits(&[]));
        assert!(!formula.is_satisfied_by(|v| v == 1));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.cnf");
        let mut formula = Formula::new(1);
        formula.add_clause(lits(&[1]));
        formula.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "p cnf 1 1\n1 0\n");
    }
}
