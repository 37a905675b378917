//! # PolyGen Core Library
//!
//! A stochastic parameter-generation library for synthesizing plausible
//! geometric and compositional descriptions of biological structures —
//! helical polymer fibers, parametric surfaces (ellipsoids, spheres, tori,
//! curvature-driven membranes) and monomer sequences — consumed by an
//! external synthetic-tomogram pipeline.
//!
//! ## Architectural Philosophy
//!
//! Every generator is an immutable value: its configuration (ranges, weights,
//! attempt budgets) is validated eagerly at construction and never mutated
//! afterwards, so instances can be reused across any number of independent
//! sampling calls. Randomness is never ambient — each sampling operation takes
//! an explicit `&mut dyn RngCore`, which keeps every draw reproducible under a
//! seeded source.
//!
//! - **[`sampling`]: The Primitive.** A validated uniform range and the
//!   bounded-exponential rejection sampler with a hard attempt cap.
//! - **[`surface`], [`sequence`], [`fiber`], [`occupancy`]: The Models.**
//!   Each family is a small capability-set trait with one concrete type per
//!   random model, so orchestration code can hold any variant behind a single
//!   interface.
//! - **[`config`]: The Entry Point.** TOML model configuration that builds
//!   validated generators.
//!
//! Rejection-based generators fail with an explicit retries-exhausted error
//! once their attempt budget is spent; nothing loops indefinitely and nothing
//! silently returns an invalid value.

pub mod config;
pub mod error;
pub mod fiber;
pub mod occupancy;
pub mod sampling;
pub mod sequence;
pub mod surface;
