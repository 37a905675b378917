//! Random parameter models for 3D parametric surfaces.
//!
//! Each variant produces one [`SurfaceParams`] set per call; the shared
//! [`SurfaceGenerator`] trait lets orchestration code hold any variant behind
//! a single interface. Geometric validity is enforced where the model defines
//! it (the ellipsoid's eccentricity gate, the torus radius ordering); variants
//! without a shape constraint perform plain bounded draws.

pub mod curvatube;
pub mod ellipsoid;
pub mod sphere;
pub mod torus;

pub use curvatube::{CurvatubeGen, CurvatubeParams};
pub use ellipsoid::EllipsoidGen;
pub use sphere::SphereGen;
pub use torus::TorusGen;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// One generated surface description, shape-dependent in arity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceParams {
    /// Semi-axes sorted descending, `a >= b >= c`.
    Ellipsoid { semi_axes: [f64; 3] },
    Sphere { radius: f64 },
    /// `ring_radius >= tube_radius`, guaranteed by ordering alone.
    Torus { ring_radius: f64, tube_radius: f64 },
    Curvatube(CurvatubeParams),
}

/// Capability set for parametric-surface parameter generators.
pub trait SurfaceGenerator {
    /// Generates one complete parameter set for this surface model.
    fn gen_parameters(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError>;

    /// Uniform density-contrast factor in `[low, high]`, shared by all
    /// surface models.
    fn gen_den_cf(&self, low: f64, high: f64, rng: &mut dyn RngCore) -> Result<f64, SampleError> {
        if !(low <= high) {
            return Err(SampleError::InvalidBounds {
                what: "density contrast factor",
                low,
                high,
            });
        }
        Ok(rng.gen_range(low..=high))
    }
}
