use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use excover::{
    encoder, parser, report,
    solver::{Solver, SolverStatus},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
pub struct Flags {
    #[arg(short, long, default_value = "input.in")]
    /// The instance file.
    input: String,
    #[arg(short, long, default_value = "output.cnf")]
    /// Output file for the DIMACS format (i.e. the CNF formula).
    output: String,
    #[arg(short, long, default_value = "glucose-syrup")]
    /// The SAT solver to be used.
    solver: String,
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    /// Verbosity of the SAT solver used.
    verb: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    let flags = Flags::parse();

    let instance = parser::instance::read(&flags.input)?;
    tracing::info!(
        "{} elements and {} subsets",
        instance.ground().len(),
        instance.subset_count()
    );

    let formula = encoder::encode(&instance.occurrences(), instance.subset_count())?;
    formula
        .save(&flags.output)
        .with_context(|| format!("could not write {}", flags.output))?;
    tracing::info!(
        "wrote {} clauses over {} variables to {}",
        formula.number_of_clauses(),
        formula.vars(),
        flags.output
    );

    let run = Solver::new(flags.solver, flags.verb).run(&flags.output)?;
    let mut out = io::stdout().lock();
    report::echo(&mut out, run.stdout())?;

    match run.status() {
        SolverStatus::Satisfiable => {
            let model = parser::model::parse(run.stdout()).context("invalid solver model")?;
            if let Err(e) = report::verify(&instance, &model) {
                tracing::warn!("solver model is not an exact cover: {}", e);
            }
            let selection = report::selected(&instance, &model)?;
            report::print_cover(&mut out, &selection)?;
        }
        SolverStatus::Unsatisfiable => tracing::info!("no exact cover exists"),
        SolverStatus::Unknown(code) => {
            tracing::warn!("solver gave no verdict (exit code {:?})", code)
        }
    }

    out.flush()?;
    Ok(())
}
