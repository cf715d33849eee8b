//! IBAN corpus generator and benchmark utilities.
//!
//! This crate provides deterministic generation of IBAN batches for
//! benchmarking and property-based testing of `iban-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_batch};
