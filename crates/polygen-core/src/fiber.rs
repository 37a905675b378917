//! Random models for helical fiber placement parameters.
//!
//! A fiber is described by a contour length, a persistence length and a
//! z-axis compression factor; branched networks additionally need a Bernoulli
//! branching decision at each growth step.

use rand::{Rng, RngCore};
use rand_distr::Exp1;

use crate::error::{ConfigError, SampleError};

/// Capability set shared by all helix-fiber parameter generators.
///
/// The sampling laws are identical across variants, so every operation is a
/// provided method; concrete types only opt in to the capability.
pub trait FiberParameterGenerator {
    /// Uniform fiber length in `[min_l, max_l]`. Both bounds must be
    /// non-negative and ordered; a violation fails fast.
    fn gen_length(
        &self,
        min_l: f64,
        max_l: f64,
        rng: &mut dyn RngCore,
    ) -> Result<f64, SampleError> {
        if !(0.0 <= min_l && min_l <= max_l) {
            return Err(SampleError::InvalidBounds {
                what: "fiber length",
                low: min_l,
                high: max_l,
            });
        }
        Ok(rng.gen_range(min_l..=max_l))
    }

    /// Persistence length as `min_p` plus a unit-rate exponential draw.
    ///
    /// There is no upper clamp, so no rejection loop is needed.
    fn gen_persistence_length(&self, min_p: f64, rng: &mut dyn RngCore) -> f64 {
        let draw: f64 = rng.sample(Exp1);
        min_p + draw
    }

    /// Uniform z-axis factor in `[min_zf, max_zf]`, a sub-range of `[0, 1]`.
    fn gen_zf_length(
        &self,
        min_zf: f64,
        max_zf: f64,
        rng: &mut dyn RngCore,
    ) -> Result<f64, SampleError> {
        if !(0.0 <= min_zf && min_zf <= max_zf && max_zf <= 1.0) {
            return Err(SampleError::InvalidBounds {
                what: "z-axis factor",
                low: min_zf,
                high: max_zf,
            });
        }
        Ok(rng.gen_range(min_zf..=max_zf))
    }
}

/// Additive capability for generators that also decide branching.
pub trait BranchingFiberGenerator: FiberParameterGenerator {
    /// Bernoulli trial: `true` (branch) with the configured probability.
    fn gen_branch(&self, rng: &mut dyn RngCore) -> bool;
}

/// Base helix-fiber parameter generator without branching support.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelixFiberGen;

impl FiberParameterGenerator for HelixFiberGen {}

/// Helix-fiber parameter generator for branched networks.
#[derive(Debug, Clone, Copy)]
pub struct BranchedHelixFiberGen {
    branch_prob: f64,
}

impl BranchedHelixFiberGen {
    /// Builds a branching generator; `branch_prob` must lie in `[0, 1]`.
    pub fn new(branch_prob: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&branch_prob) {
            return Err(ConfigError::OutOfDomain {
                name: "branch_prob",
                value: branch_prob,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(Self { branch_prob })
    }

    pub fn branch_prob(&self) -> f64 {
        self.branch_prob
    }
}

impl Default for BranchedHelixFiberGen {
    fn default() -> Self {
        Self { branch_prob: 0.5 }
    }
}

impl FiberParameterGenerator for BranchedHelixFiberGen {}

impl BranchingFiberGenerator for BranchedHelixFiberGen {
    fn gen_branch(&self, rng: &mut dyn RngCore) -> bool {
        rng.gen_bool(self.branch_prob)
    }
}
