use rand::RngCore;

use super::{SurfaceGenerator, SurfaceParams};
use crate::error::SampleError;
use crate::sampling::ValueRange;

/// Random parameter model for tori.
///
/// Two independent uniform draws from one radius range, returned sorted
/// descending as (ring, tube). Ordering comes from the sort alone; no
/// clearance between the radii is enforced.
#[derive(Debug, Clone, Copy)]
pub struct TorusGen {
    radius_rg: ValueRange,
}

impl TorusGen {
    pub fn new(radius_rg: ValueRange) -> Self {
        Self { radius_rg }
    }

    pub fn radius_range(&self) -> ValueRange {
        self.radius_rg
    }
}

impl SurfaceGenerator for TorusGen {
    fn gen_parameters(&self, rng: &mut dyn RngCore) -> Result<SurfaceParams, SampleError> {
        let a = self.radius_rg.sample_uniform(rng);
        let b = self.radius_rg.sample_uniform(rng);
        let (ring_radius, tube_radius) = if a >= b { (a, b) } else { (b, a) };
        Ok(SurfaceParams::Torus {
            ring_radius,
            tube_radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn radii_are_ordered_and_within_range() {
        let range = ValueRange::new(5.0, 40.0).unwrap();
        let generator = TorusGen::new(range);
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..10_000 {
            match generator.gen_parameters(&mut rng).unwrap() {
                SurfaceParams::Torus {
                    ring_radius,
                    tube_radius,
                } => {
                    assert!(ring_radius >= tube_radius);
                    assert!(range.contains(ring_radius) && range.contains(tube_radius));
                }
                other => panic!("expected torus parameters, got {other:?}"),
            }
        }
    }
}
