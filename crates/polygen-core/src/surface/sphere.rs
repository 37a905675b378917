use rand::RngCore;

use super::{SurfaceGenerator, SurfaceParams};
use crate::error::SampleError;
use crate::sampling::ValueRange;

/// Random parameter model for spheres: one uniform radius, no rejection.
#[derive(Debug, Clone, Copy)]
pub struct SphereGen {
    radius_rg: ValueRange,
}

impl SphereGen {
    pub fn new(radius_rg: ValueRange) -> Self {
        Self { radius_rg }
    }

    pub fn radius_range(&self) -> ValueRange {
        self.radius_rg
    }
}

impl SurfaceGenerator for SphereGen {
    fn gen_parameters(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError> {
        Ok(SurfaceParams::Sphere {
            radius: self.radius_rg.sample_uniform(rng),
        })
    }
}
