//! Random exact cover instances in the brace format.

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::error::GeneratorError;

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Number of ground set elements, named `1..=ground_size`.
    pub ground_size: usize,
    /// The family holds `ground_size * subset_multiplier` random subsets.
    pub subset_multiplier: usize,
    /// Also insert a random partition of the ground set so an exact cover exists.
    pub guaranteed: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            ground_size: 5,
            subset_multiplier: 1,
            guaranteed: false,
        }
    }
}

/// A generated instance. Subsets hold 0-indexed elements in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub ground_size: usize,
    pub subsets: Vec<Vec<usize>>,
}

impl Generated {
    pub fn render(&self) -> String {
        let mut out = format!(
            "{{ {}}}\n{{\n",
            (1..=self.ground_size).map(|e| format!("{} ", e)).join("")
        );
        for subset in &self.subsets {
            out.push_str(&format!(
                "    {{ {} }}\n",
                subset.iter().map(|e| e + 1).join(" ")
            ));
        }
        out.push_str("}\n");
        out
    }
}

pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Generated, GeneratorError> {
    let n = config.ground_size;
    if n == 0 {
        return Err(GeneratorError::EmptyGroundSet);
    }

    let mut elements = (0..n).collect::<Vec<_>>();
    let mut subsets = (0..n * config.subset_multiplier)
        .map(|_| {
            elements.shuffle(rng);
            let size = if n > 1 { rng.gen_range(1..n) } else { 1 };
            elements[..size].iter().copied().sorted().collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    if config.guaranteed {
        let mut buckets = vec![Vec::new(); n];
        for element in 0..n {
            buckets[rng.gen_range(0..n)].push(element);
        }
        for bucket in buckets.into_iter().filter(|b| !b.is_empty()) {
            let at = rng.gen_range(0..=subsets.len());
            subsets.insert(at, bucket);
        }
    }

    tracing::debug!("generated {} subsets over {} elements", subsets.len(), n);
    Ok(Generated {
        ground_size: n,
        subsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoder::encode, parser};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn render_format() {
        let generated = Generated {
            ground_size: 3,
            subsets: vec![vec![0, 2], vec![1]],
        };
        assert_eq!(generated.render(), "{ 1 2 3 }\n{\n    { 1 3 }\n    { 2 }\n}\n");
    }

    #[test]
    fn random_subsets_are_proper_and_sorted() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GeneratorConfig {
            ground_size: 6,
            subset_multiplier: 3,
            guaranteed: false,
        };
        let generated = generate(&config, &mut rng).unwrap();
        assert_eq!(generated.subsets.len(), 18);
        for subset in &generated.subsets {
            assert!(!subset.is_empty() && subset.len() < 6);
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(subset.iter().all(|&e| e < 6));
        }
    }

    #[test]
    fn guaranteed_instances_have_a_cover() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig {
            ground_size: 4,
            subset_multiplier: 1,
            guaranteed: true,
        };
        for _ in 0..20 {
            let generated = generate(&config, &mut rng).unwrap();
            let instance = parser::instance::parse(&generated.render()).unwrap();
            assert_eq!(instance.subset_count(), generated.subsets.len());

            let formula = encode(&instance.occurrences(), instance.subset_count()).unwrap();
            let m = instance.subset_count();
            assert!((0..(1u32 << m)).any(|bits| formula.is_satisfied_by(|v| bits & (1 << (v - 1)) != 0)));
        }
    }

    #[test]
    fn single_element_ground_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig {
            ground_size: 1,
            subset_multiplier: 2,
            guaranteed: false,
        };
        let generated = generate(&config, &mut rng).unwrap();
        assert_eq!(generated.subsets, vec![vec![0], vec![0]]);
    }

    #[test]
    fn empty_ground_set_is_rejected() {
        let config = GeneratorConfig {
            ground_size: 0,
            ..Default::default()
        };
        assert_eq!(
            generate(&config, &mut StdRng::seed_from_u64(0)),
            Err(GeneratorError::EmptyGroundSet)
        );
    }
}
