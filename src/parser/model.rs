use nom::{
    character::complete::{char, space0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, preceded},
    IResult, Parser,
};

use super::{near, parse_i32};
use crate::{
    common::{Literal, Model},
    error::ModelError,
};

fn parse_value_line(input: &str) -> IResult<&str, Vec<i32>> {
    all_consuming(delimited(
        preceded(char('v'), space1),
        separated_list1(space1, parse_i32),
        space0,
    ))
    .parse(input)
}

/// Extract the model from solver output. Value lines start with `v` and together list the
/// literals followed by a single terminating 0.
pub fn parse(output: &str) -> Result<Model, ModelError> {
    let mut values = Vec::new();
    for line in output.lines().filter(|l| l.starts_with('v')) {
        let line = line.trim_end();
        let (_, ids) = parse_value_line(line).map_err(|e| {
            tracing::debug!("value line rejected near '{}'", near(e));
            ModelError::MalformedLine(line.to_string())
        })?;
        values.extend(ids);
    }

    match values.split_last() {
        None => Err(ModelError::NoValueLines),
        Some((0, rest)) => {
            if rest.contains(&0) {
                return Err(ModelError::MisplacedSentinel);
            }
            Ok(Model::new(rest.iter().map(|&i| Literal::from(i)).collect()))
        }
        Some(_) => Err(ModelError::MissingSentinel),
    }
}
