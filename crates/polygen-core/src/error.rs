use thiserror::Error;

/// Construction-time validation failures.
///
/// A generator constructor returning one of these never hands back a partially
/// valid instance; the configuration is checked eagerly and rejected whole.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid range: low ({low}) must not exceed high ({high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("Parameter '{name}' is {value}, outside its domain [{min}, {max}]")]
    OutOfDomain {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Monomer proportions must sum to 1, got {sum}")]
    UnnormalizedProportions { sum: f64 },

    #[error("Monomer proportion at index {index} is negative: {value}")]
    NegativeProportion { index: usize, value: f64 },

    #[error("Proportions list must contain at least one monomer type")]
    NoMonomerTypes,

    #[error("Maximum attempt count must be positive")]
    ZeroMaxTries,

    #[error("Failed to build weighted distribution: {source}")]
    Distribution {
        #[from]
        source: rand::distributions::WeightedError,
    },
}

/// Call-time sampling failures.
///
/// `ExhaustedRetries` is terminal for the current sampling attempt: the
/// configured attempt budget IS the retry policy, and callers must not loop
/// past it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    #[error("No admissible draw found within {tries} attempts")]
    ExhaustedRetries { tries: usize },

    #[error("Invalid bounds for {what}: [{low}, {high}]")]
    InvalidBounds {
        what: &'static str,
        low: f64,
        high: f64,
    },

    #[error("Exponential mean must be positive, got {mean}")]
    InvalidMean { mean: f64 },

    #[error("Number of monomer types must be positive")]
    NoMonomerTypes,
}
