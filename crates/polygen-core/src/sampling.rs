use rand::{Rng, RngCore};
use rand_distr::{Distribution, Exp};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ConfigError, SampleError};

/// Attempt budget for the bounded-exponential rejection sampler.
pub const MAX_TRIES_EXP: usize = 1_000_000;

/// A validated closed interval `[low, high]` used as a uniform sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    low: f64,
    high: f64,
}

impl ValueRange {
    /// Builds a range, rejecting reversed bounds and NaN endpoints.
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        if !(low <= high) {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Caller guarantees `low <= high`.
    pub(crate) const fn new_unchecked(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Draws a uniform value in `[low, high]` inclusive.
    pub fn sample_uniform(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(self.low..=self.high)
    }
}

impl TryFrom<(f64, f64)> for ValueRange {
    type Error = ConfigError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.low, range.high)
    }
}

/// Draws from an exponential distribution with the given mean until the draw
/// falls within `[lower, upper]` inclusive, using the default attempt budget.
pub fn gen_bounded_exp(
    mean: f64,
    lower: f64,
    upper: f64,
    rng: &mut dyn RngCore,
) -> Result<f64, SampleError> {
    gen_bounded_exp_with(mean, lower, upper, MAX_TRIES_EXP, rng)
}

/// Bounded-exponential rejection sampler with an explicit attempt budget.
///
/// Attempts are independent draws; no state is kept beyond the counter. Fails
/// with [`SampleError::ExhaustedRetries`] once the budget is spent, rather
/// than looping indefinitely on a range the distribution rarely reaches.
#[instrument(level = "trace", skip(rng))]
pub fn gen_bounded_exp_with(
    mean: f64,
    lower: f64,
    upper: f64,
    max_tries: usize,
    rng: &mut dyn RngCore,
) -> Result<f64, SampleError> {
    if !(mean > 0.0) {
        return Err(SampleError::InvalidMean { mean });
    }
    if !(lower <= upper) {
        return Err(SampleError::InvalidBounds {
            what: "bounded exponential",
            low: lower,
            high: upper,
        });
    }

    let exp = Exp::new(1.0 / mean).map_err(|_| SampleError::InvalidMean { mean })?;
    for _ in 0..max_tries {
        let draw = exp.sample(rng);
        if draw >= lower && draw <= upper {
            return Ok(draw);
        }
    }
    Err(SampleError::ExhaustedRetries { tries: max_tries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn value_range_rejects_reversed_bounds() {
        let err = ValueRange::new(2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRange {
                low: 2.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn value_range_rejects_nan_endpoints() {
        assert!(ValueRange::new(f64::NAN, 1.0).is_err());
        assert!(ValueRange::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn value_range_allows_degenerate_interval() {
        let range = ValueRange::new(3.0, 3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(range.sample_uniform(&mut rng), 3.0);
    }

    #[test]
    fn uniform_draws_stay_within_bounds() {
        let range = ValueRange::new(-1.5, 4.25).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let v = range.sample_uniform(&mut rng);
            assert!(range.contains(v));
        }
    }

    #[test]
    fn bounded_exp_draws_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5_000 {
            let v = gen_bounded_exp(1.0, 0.5, 1.5, &mut rng).unwrap();
            assert!((0.5..=1.5).contains(&v));
        }
    }

    #[test]
    fn bounded_exp_exhausts_on_unreachable_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = gen_bounded_exp(1.0, 100.0, 100.0001, &mut rng).unwrap_err();
        assert!(matches!(err, SampleError::ExhaustedRetries { .. }));
    }

    #[test]
    fn bounded_exp_rejects_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = gen_bounded_exp(1.0, 2.0, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, SampleError::InvalidBounds { .. }));
    }

    #[test]
    fn bounded_exp_rejects_non_positive_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            gen_bounded_exp(0.0, 0.0, 1.0, &mut rng),
            Err(SampleError::InvalidMean { .. })
        ));
        assert!(matches!(
            gen_bounded_exp(-1.0, 0.0, 1.0, &mut rng),
            Err(SampleError::InvalidMean { .. })
        ));
    }

    #[test]
    fn bounded_exp_is_deterministic_for_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = gen_bounded_exp(2.0, 0.1, 10.0, &mut rng_a).unwrap();
        let b = gen_bounded_exp(2.0, 0.1, 10.0, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
