use rand::RngCore;

use crate::error::ConfigError;
use crate::sampling::ValueRange;

/// Random model for target occupancy (volume fill fraction, in percent).
#[derive(Debug, Clone, Copy)]
pub struct OccupancyGen {
    occ_rg: ValueRange,
}

impl OccupancyGen {
    /// Builds an occupancy generator over a sub-range of `[0, 100]`.
    pub fn new(occ_rg: ValueRange) -> Result<Self, ConfigError> {
        if occ_rg.low() < 0.0 {
            return Err(ConfigError::OutOfDomain {
                name: "occupancy low",
                value: occ_rg.low(),
                min: 0.0,
                max: 100.0,
            });
        }
        if occ_rg.high() > 100.0 {
            return Err(ConfigError::OutOfDomain {
                name: "occupancy high",
                value: occ_rg.high(),
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(Self { occ_rg })
    }

    pub fn range(&self) -> ValueRange {
        self.occ_rg
    }

    /// Uniform occupancy draw within the configured sub-range.
    pub fn gen_occupancy(&self, rng: &mut dyn RngCore) -> f64 {
        self.occ_rg.sample_uniform(rng)
    }
}
