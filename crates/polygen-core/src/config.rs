//! Model configuration loaded from TOML.
//!
//! A configuration file carries one optional section per random model; each
//! section knows how to build its validated generator. Range ordering is
//! checked during deserialization (through [`ValueRange`]), so a structurally
//! valid file can still be rejected before any generator exists.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ConfigError;
use crate::fiber::BranchedHelixFiberGen;
use crate::occupancy::OccupancyGen;
use crate::sampling::ValueRange;
use crate::sequence::{FixedCyclicGen, ProportionalGen, SequenceGenerator, UniformGen};
use crate::surface::curvatube::{DEFAULT_A_RG, DEFAULT_B_RG, DEFAULT_C_RG, DEFAULT_MASS_RG};
use crate::surface::ellipsoid::MAX_TRIES_ELLIP;
use crate::surface::{CurvatubeGen, EllipsoidGen, SphereGen, TorusGen};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Root of a model-configuration document. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    pub fiber: Option<FiberSection>,
    #[serde(default)]
    pub surface: SurfaceSection,
    pub sequence: Option<SequenceSection>,
    pub occupancy: Option<OccupancySection>,
}

impl ModelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FiberSection {
    #[serde(default = "default_branch_prob")]
    pub branch_prob: f64,
}

impl FiberSection {
    pub fn build(&self) -> Result<BranchedHelixFiberGen, ConfigError> {
        BranchedHelixFiberGen::new(self.branch_prob)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurfaceSection {
    pub ellipsoid: Option<EllipsoidSection>,
    pub sphere: Option<SphereSection>,
    pub torus: Option<TorusSection>,
    pub curvatube: Option<CurvatubeSection>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EllipsoidSection {
    pub radius_range: ValueRange,
    #[serde(default = "default_max_ecc")]
    pub max_ecc: f64,
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,
}

impl EllipsoidSection {
    pub fn build(&self) -> Result<EllipsoidGen, ConfigError> {
        EllipsoidGen::new(self.radius_range, self.max_ecc, self.max_tries)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SphereSection {
    pub radius_range: ValueRange,
}

impl SphereSection {
    pub fn build(&self) -> SphereGen {
        SphereGen::new(self.radius_range)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TorusSection {
    pub radius_range: ValueRange,
}

impl TorusSection {
    pub fn build(&self) -> TorusGen {
        TorusGen::new(self.radius_range)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurvatubeSection {
    #[serde(default = "default_mass_range")]
    pub mass_range: ValueRange,
    #[serde(default = "default_a_range")]
    pub a_range: ValueRange,
    #[serde(default = "default_b_range")]
    pub b_range: ValueRange,
    #[serde(default = "default_c_range")]
    pub c_range: ValueRange,
}

impl CurvatubeSection {
    pub fn build(&self) -> CurvatubeGen {
        CurvatubeGen::new(self.mass_range, self.a_range, self.b_range, self.c_range)
    }
}

/// Sequence model selector; proportions are only meaningful for the
/// proportional model.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum SequenceSection {
    Fixed,
    Uniform,
    Proportional { proportions: Vec<f64> },
}

impl SequenceSection {
    pub fn build(&self) -> Result<Box<dyn SequenceGenerator>, ConfigError> {
        Ok(match self {
            Self::Fixed => Box::new(FixedCyclicGen),
            Self::Uniform => Box::new(UniformGen),
            Self::Proportional { proportions } => {
                Box::new(ProportionalGen::new(proportions.clone())?)
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OccupancySection {
    pub range: ValueRange,
}

impl OccupancySection {
    pub fn build(&self) -> Result<OccupancyGen, ConfigError> {
        OccupancyGen::new(self.range)
    }
}

fn default_branch_prob() -> f64 {
    0.5
}

fn default_max_ecc() -> f64 {
    1.0
}

fn default_max_tries() -> usize {
    MAX_TRIES_ELLIP
}

fn default_mass_range() -> ValueRange {
    DEFAULT_MASS_RG
}

fn default_a_range() -> ValueRange {
    DEFAULT_A_RG
}

fn default_b_range() -> ValueRange {
    DEFAULT_B_RG
}

fn default_c_range() -> ValueRange {
    DEFAULT_C_RG
}
