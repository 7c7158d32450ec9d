//! Reader for the brace based instance format:
//!
//! ```text
//! { 1 2 3 }
//! {
//!     { 1 2 }
//!     { 3 }
//! }
//! ```
//!
//! The first line holds the ground set, the rest of the input the subset family.

use std::path::Path;

use anyhow::Context;
use fxhash::FxHashSet;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, consumed},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult, Parser,
};

use super::near;
use crate::{
    common::{GroundSet, Instance, Subset},
    error::FormatError,
};

fn parse_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '{' && c != '}')(input)
}

/// A brace group of tokens. Returns the text between the braces alongside the tokens.
fn parse_group(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    delimited(
        char('{'),
        consumed(preceded(
            multispace0,
            many0(terminated(parse_token, multispace0)),
        )),
        char('}'),
    )
    .parse(input)
}

fn parse_family(input: &str) -> IResult<&str, Vec<(&str, Vec<&str>)>> {
    all_consuming(delimited(
        pair(multispace0, char('{')),
        many0(preceded(multispace0, parse_group)),
        tuple((multispace0, char('}'), multispace0)),
    ))
    .parse(input)
}

fn parse_ground(line: &str) -> Result<GroundSet, FormatError> {
    let (_, (_, tokens)) = all_consuming(delimited(multispace0, parse_group, multispace0))
        .parse(line)
        .map_err(|e| FormatError::MalformedGroundSet(near(e)))?;

    let mut ground = GroundSet::default();
    for token in tokens {
        if !ground.push(token) {
            return Err(FormatError::DuplicateGroundElement(token.to_string()));
        }
    }
    if ground.is_empty() {
        return Err(FormatError::EmptyGroundSet);
    }
    Ok(ground)
}

fn build_subset(ground: &GroundSet, text: &str, tokens: &[&str]) -> Result<Subset, FormatError> {
    let mut seen = FxHashSet::default();
    let mut elements = Vec::with_capacity(tokens.len());
    for &token in tokens {
        if !seen.insert(token) {
            return Err(FormatError::DuplicateSubsetElement {
                element: token.to_string(),
                subset: text.trim().to_string(),
            });
        }
        let index = ground
            .index_of(token)
            .ok_or_else(|| FormatError::UnknownElement(token.to_string()))?;
        elements.push(index);
    }
    Ok(Subset { elements })
}

/// Parse an instance. Nothing is returned unless the whole input is well formed.
pub fn parse(input: &str) -> Result<Instance, FormatError> {
    let (first, rest) = input.split_once('\n').unwrap_or((input, ""));
    let ground = parse_ground(first)?;
    tracing::debug!("ground set with {} elements", ground.len());

    let (_, groups) = parse_family(rest).map_err(|e| FormatError::MalformedFamily(near(e)))?;
    let subsets = groups
        .iter()
        .map(|(text, tokens)| build_subset(&ground, text, tokens))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("family with {} subsets", subsets.len());

    Ok(Instance::new(ground, subsets))
}

/// Read and parse an instance file.
pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Instance> {
    let path = path.as_ref();
    tracing::info!("reading instance {}", path.display());
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("could not read instance {}", path.display()))?;
    parse(&input).with_context(|| format!("invalid instance {}", path.display()))
}
