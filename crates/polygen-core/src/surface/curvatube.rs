use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{SurfaceGenerator, SurfaceParams};
use crate::error::SampleError;
use crate::sampling::ValueRange;

/// Interface width of the phase-field model, fixed for every sample.
pub const CURVATUBE_EPS: f64 = 0.02;
/// Leading curvature coefficient, fixed at 1 for every sample.
pub const CURVATUBE_A20: f64 = 1.0;

pub(crate) const DEFAULT_MASS_RG: ValueRange = ValueRange::new_unchecked(-0.7, 0.3);
pub(crate) const DEFAULT_A_RG: ValueRange = ValueRange::new_unchecked(-10.0, 10.0);
pub(crate) const DEFAULT_B_RG: ValueRange = ValueRange::new_unchecked(-100.0, 100.0);
pub(crate) const DEFAULT_C_RG: ValueRange = ValueRange::new_unchecked(-1000.0, 1000.0);

/// Coefficient vector of the curvature-driven membrane (curvatube) model.
///
/// `eps` and `a20` are fixed; the remaining six coefficients are free and
/// drawn from the generator's configured ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatubeParams {
    pub eps: f64,
    pub a20: f64,
    pub a11: f64,
    pub a02: f64,
    pub b10: f64,
    pub b01: f64,
    pub c: f64,
    pub mass: f64,
}

/// Random parameter model for curvatube membranes.
///
/// Each free coefficient is drawn uniformly and independently; `{a11, a02}`
/// share one range and `{b10, b01}` share another. No cross-parameter
/// validity check is applied — plausibility of the implied surface is the
/// downstream synthesizer's concern.
#[derive(Debug, Clone, Copy)]
pub struct CurvatubeGen {
    mass_rg: ValueRange,
    a_rg: ValueRange,
    b_rg: ValueRange,
    c_rg: ValueRange,
}

impl CurvatubeGen {
    pub fn new(mass_rg: ValueRange, a_rg: ValueRange, b_rg: ValueRange, c_rg: ValueRange) -> Self {
        Self {
            mass_rg,
            a_rg,
            b_rg,
            c_rg,
        }
    }
}

impl Default for CurvatubeGen {
    fn default() -> Self {
        Self {
            mass_rg: DEFAULT_MASS_RG,
            a_rg: DEFAULT_A_RG,
            b_rg: DEFAULT_B_RG,
            c_rg: DEFAULT_C_RG,
        }
    }
}

impl SurfaceGenerator for CurvatubeGen {
    fn gen_parameters(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError> {
        Ok(SurfaceParams::Curvatube(CurvatubeParams {
            eps: CURVATUBE_EPS,
            a20: CURVATUBE_A20,
            a11: self.a_rg.sample_uniform(rng),
            a02: self.a_rg.sample_uniform(rng),
            b10: self.b_rg.sample_uniform(rng),
            b01: self.b_rg.sample_uniform(rng),
            c: self.c_rg.sample_uniform(rng),
            mass: self.mass_rg.sample_uniform(rng),
        }))
    }
}
