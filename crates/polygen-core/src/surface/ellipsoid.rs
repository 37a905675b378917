use std::cmp::Ordering;

use rand::RngCore;
use tracing::instrument;

use super::{SurfaceGenerator, SurfaceParams};
use crate::error::{ConfigError, SampleError};
use crate::sampling::{ValueRange, gen_bounded_exp};

/// Default attempt budget for the eccentricity rejection loop.
pub const MAX_TRIES_ELLIP: usize = 1_000_000;

/// Random parameter model for ellipsoids.
///
/// Semi-axes are drawn independently from the radius range and accepted only
/// when both eccentricities against the minor axis stay below the configured
/// maximum; draws are rejected until that gate passes or the attempt budget
/// runs out.
#[derive(Debug, Clone, Copy)]
pub struct EllipsoidGen {
    radius_rg: ValueRange,
    max_ecc: f64,
    max_tries: usize,
}

impl EllipsoidGen {
    /// Builds an ellipsoid generator.
    ///
    /// `max_ecc` must lie in `[0, 1]` and `max_tries` must be positive.
    pub fn new(radius_rg: ValueRange, max_ecc: f64, max_tries: usize) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&max_ecc) {
            return Err(ConfigError::OutOfDomain {
                name: "max_ecc",
                value: max_ecc,
                min: 0.0,
                max: 1.0,
            });
        }
        if max_tries == 0 {
            return Err(ConfigError::ZeroMaxTries);
        }
        Ok(Self {
            radius_rg,
            max_ecc,
            max_tries,
        })
    }

    pub fn radius_range(&self) -> ValueRange {
        self.radius_rg
    }

    pub fn max_ecc(&self) -> f64 {
        self.max_ecc
    }

    /// Like [`SurfaceGenerator::gen_parameters`], but draws each semi-axis
    /// from a bounded exponential with mean `8 * low`, skewing the axis
    /// distribution toward the low end of the range. The eccentricity gate is
    /// unchanged.
    #[instrument(level = "trace", skip(self, rng))]
    pub fn gen_parameters_exp(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError> {
        let (low, high) = (self.radius_rg.low(), self.radius_rg.high());
        self.accept_loop(rng, |rng| gen_bounded_exp(8.0 * low, low, high, rng))
    }

    fn accept_loop(
        &self,
        rng: &mut dyn RngCore,
        mut draw: impl FnMut(&mut dyn RngCore) -> Result<f64, SampleError>,
    ) -> Result<SurfaceParams, SampleError> {
        for _ in 0..self.max_tries {
            let mut axes = [draw(&mut *rng)?, draw(&mut *rng)?, draw(&mut *rng)?];
            axes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
            let e1 = eccentricity(axes[2], axes[0]);
            let e2 = eccentricity(axes[2], axes[1]);
            if e1 <= self.max_ecc && e2 <= self.max_ecc {
                return Ok(SurfaceParams::Ellipsoid { semi_axes: axes });
            }
        }
        Err(SampleError::ExhaustedRetries {
            tries: self.max_tries,
        })
    }
}

impl SurfaceGenerator for EllipsoidGen {
    #[instrument(level = "trace", skip(self, rng))]
    fn gen_parameters(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError> {
        self.accept_loop(rng, |rng| Ok(self.radius_rg.sample_uniform(rng)))
    }
}

fn eccentricity(minor: f64, major: f64) -> f64 {
    (1.0 - (minor / major).powi(2)).sqrt()
}
