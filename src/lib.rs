//! Solve exact cover instances by reducing them to SAT and handing the formula to an external
//! solver.

pub mod common;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod parser;
pub mod report;
pub mod solver;
