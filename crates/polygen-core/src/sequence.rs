//! Random models for monomer sequences along a polymer chain.
//!
//! All variants share one call signature so orchestration code can hold any
//! model behind a single interface; the memoryless models simply ignore the
//! arguments they do not need.

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, RngCore};

use crate::error::{ConfigError, SampleError};

/// Proportions must sum to 1 within this tolerance.
const PROP_SUM_TOLERANCE: f64 = 1e-9;

/// Capability set for monomer-sequence generators.
pub trait SequenceGenerator: std::fmt::Debug {
    /// Produces the identifier of the next monomer type, in `[0, n_types)`.
    ///
    /// `prev_id` is `None` on the first call of a chain; memoryless models
    /// ignore it (and the proportional model also ignores `n_types`), but the
    /// parameters are part of the shared signature.
    fn gen_next_mmer_id(
        &self,
        n_types: usize,
        prev_id: Option<usize>,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SampleError>;
}

/// Deterministic cyclic sequence: each monomer follows its predecessor,
/// wrapping back to 0 past the last type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCyclicGen;

impl SequenceGenerator for FixedCyclicGen {
    fn gen_next_mmer_id(
        &self,
        n_types: usize,
        prev_id: Option<usize>,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, SampleError> {
        if n_types == 0 {
            return Err(SampleError::NoMonomerTypes);
        }
        let next = match prev_id {
            None => 0,
            Some(prev) => {
                let curr = prev + 1;
                if curr >= n_types { 0 } else { curr }
            }
        };
        Ok(next)
    }
}

/// Memoryless uniform sequence over `[0, n_types)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformGen;

impl SequenceGenerator for UniformGen {
    fn gen_next_mmer_id(
        &self,
        n_types: usize,
        _prev_id: Option<usize>,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SampleError> {
        if n_types == 0 {
            return Err(SampleError::NoMonomerTypes);
        }
        Ok(rng.gen_range(0..n_types))
    }
}

/// Memoryless categorical sequence over a fixed proportion vector.
///
/// The weighted table is built once at construction and reused across calls.
#[derive(Debug, Clone)]
pub struct ProportionalGen {
    proportions: Vec<f64>,
    table: WeightedIndex<f64>,
}

impl ProportionalGen {
    /// Builds a proportional generator from a vector of per-type proportions.
    ///
    /// Entries must be non-negative and sum to 1.
    pub fn new(proportions: Vec<f64>) -> Result<Self, ConfigError> {
        if proportions.is_empty() {
            return Err(ConfigError::NoMonomerTypes);
        }
        for (index, &value) in proportions.iter().enumerate() {
            if value < 0.0 {
                return Err(ConfigError::NegativeProportion { index, value });
            }
        }
        let sum: f64 = proportions.iter().sum();
        if (sum - 1.0).abs() > PROP_SUM_TOLERANCE {
            return Err(ConfigError::UnnormalizedProportions { sum });
        }
        let table = WeightedIndex::new(&proportions)?;
        Ok(Self { proportions, table })
    }

    pub fn n_types(&self) -> usize {
        self.proportions.len()
    }

    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }
}

impl SequenceGenerator for ProportionalGen {
    fn gen_next_mmer_id(
        &self,
        _n_types: usize,
        _prev_id: Option<usize>,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SampleError> {
        Ok(self.table.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_cyclic_wraps_around() {
        let generator = FixedCyclicGen;
        let mut rng = StdRng::seed_from_u64(61);
        for (prev, expected) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert_eq!(
                generator
                    .gen_next_mmer_id(4, Some(prev), &mut rng)
                    .unwrap(),
                expected
            );
        }
    }

    #[test]
    fn fixed_cyclic_first_call_yields_zero() {
        let generator = FixedCyclicGen;
        let mut rng = StdRng::seed_from_u64(61);
        assert_eq!(generator.gen_next_mmer_id(4, None, &mut rng).unwrap(), 0);
    }

    #[test]
    fn uniform_ids_cover_the_alphabet() {
        let generator = UniformGen;
        let mut rng = StdRng::seed_from_u64(62);
        let mut seen = [false; 5];
        for _ in 0..10_000 {
            let id = generator.gen_next_mmer_id(5, None, &mut rng).unwrap();
            assert!(id < 5);
            seen[id] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn empty_alphabet_fails_fast() {
        let mut rng = StdRng::seed_from_u64(63);
        assert_eq!(
            FixedCyclicGen.gen_next_mmer_id(0, None, &mut rng),
            Err(SampleError::NoMonomerTypes)
        );
        assert_eq!(
            UniformGen.gen_next_mmer_id(0, None, &mut rng),
            Err(SampleError::NoMonomerTypes)
        );
    }

    #[test]
    fn degenerate_proportions_always_return_the_weighted_type() {
        let generator = ProportionalGen::new(vec![1.0, 0.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..1_000 {
            assert_eq!(generator.gen_next_mmer_id(3, None, &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn unnormalized_proportions_are_rejected() {
        let err = ProportionalGen::new(vec![0.33, 0.33, 0.33]).unwrap_err();
        assert!(matches!(err, ConfigError::UnnormalizedProportions { .. }));
    }

    #[test]
    fn negative_and_empty_proportions_are_rejected() {
        assert!(matches!(
            ProportionalGen::new(vec![1.5, -0.5]).unwrap_err(),
            ConfigError::NegativeProportion { index: 1, .. }
        ));
        assert_eq!(
            ProportionalGen::new(vec![]).unwrap_err(),
            ConfigError::NoMonomerTypes
        );
    }

    #[test]
    fn proportional_ids_stay_within_the_alphabet() {
        let generator = ProportionalGen::new(vec![0.5, 0.3, 0.2]).unwrap();
        let mut rng = StdRng::seed_from_u64(65);
        for _ in 0..10_000 {
            assert!(generator.gen_next_mmer_id(3, None, &mut rng).unwrap() < 3);
        }
    }

    #[test]
    fn models_share_one_interface() {
        let generators: Vec<Box<dyn SequenceGenerator>> = vec![
            Box::new(FixedCyclicGen),
            Box::new(UniformGen),
            Box::new(ProportionalGen::new(vec![0.25, 0.75]).unwrap()),
        ];
        let mut rng = StdRng::seed_from_u64(66);
        for generator in &generators {
            assert!(generator.gen_next_mmer_id(2, Some(0), &mut rng).unwrap() < 2);
        }
    }
}
