//! Error types of the library. The binaries wrap these in `anyhow`.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Problems with the textual instance description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid ground set near '{0}'")]
    MalformedGroundSet(String),

    #[error("the ground set is empty")]
    EmptyGroundSet,

    #[error("element {0} is repeated in the ground set")]
    DuplicateGroundElement(String),

    #[error("invalid subset family near '{0}'")]
    MalformedFamily(String),

    #[error("element {element} is repeated in the \"{{{subset}}}\" set")]
    DuplicateSubsetElement { element: String, subset: String },

    #[error("element {0} has not been found in the ground set")]
    UnknownElement(String),
}

/// The occurrence index does not fit the subset family it was derived from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("element {element} references subset {position}, only 1..={subset_count} exist")]
    PositionOutOfRange {
        element: usize,
        position: usize,
        subset_count: usize,
    },

    #[error("{0} subsets do not fit into DIMACS variables")]
    TooManySubsets(usize),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("file {0} has not been found")]
    MissingCnf(PathBuf),

    #[error("could not start solver '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// The solver output does not follow the `v <literals> 0` convention.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("solver output contains no value lines")]
    NoValueLines,

    #[error("invalid value line '{0}'")]
    MalformedLine(String),

    #[error("model is not terminated by 0")]
    MissingSentinel,

    #[error("0 appears before the end of the model")]
    MisplacedSentinel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("model sets variable {var} but there are only {subset_count} subsets")]
    UnknownVariable { var: usize, subset_count: usize },

    #[error("element {0} is not covered by the selected subsets")]
    Uncovered(String),

    #[error("element {element} is covered {count} times by the selected subsets")]
    Overcovered { element: String, count: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("the ground set needs at least one element")]
    EmptyGroundSet,
}
