use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use excover::generator::{generate, GeneratorConfig};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
pub struct Flags {
    #[arg(long, default_value_t = 5)]
    /// Number of elements in the ground set.
    size: usize,
    #[arg(long, default_value_t = 1)]
    /// How many random subsets to create per ground set element.
    multiplier: usize,
    #[arg(long)]
    /// Insert a random partition of the ground set so the instance has an exact cover.
    guaranteed: bool,
    #[arg(long)]
    /// Seed for the random number generator, random if omitted.
    seed: Option<u64>,
    #[arg(short, long, default_value = "input.in")]
    /// File to write the instance to.
    output: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    let flags = Flags::parse();

    let mut rng = match flags.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = GeneratorConfig {
        ground_size: flags.size,
        subset_multiplier: flags.multiplier,
        guaranteed: flags.guaranteed,
    };
    let generated = generate(&config, &mut rng)?;

    std::fs::write(&flags.output, generated.render())
        .with_context(|| format!("could not write {}", flags.output))?;
    tracing::info!(
        "wrote {} subsets over {} elements to {}",
        generated.subsets.len(),
        generated.ground_size,
        flags.output
    );
    Ok(())
}
