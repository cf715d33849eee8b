//! IBAN batch generator.
//!
//! Produces a mix of valid IBANs across every registry country, a
//! configurable share of them corrupted, and some written in display form.

pub mod ibans;

use iban_core::Country;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub use ibans::{corrupt_digit, gen_bban, gen_valid_iban, to_display_form};

/// Configuration for the batch generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of IBANs to generate.
    pub count: usize,
    /// Fraction of IBANs with one altered digit (0.0-1.0).
    pub corrupt_fraction: f64,
    /// Fraction of IBANs written in spaced, lower-case form (0.0-1.0).
    pub display_fraction: f64,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 IBANs
    Small,
    /// 10 000 IBANs
    Medium,
    /// 100 000 IBANs
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
        };
        GeneratorConfig {
            seed,
            count,
            corrupt_fraction: 0.1,
            display_fraction: 0.3,
        }
    }
}

/// One generated IBAN and whether it is expected to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIban {
    /// The IBAN text, in electronic or display form.
    pub text: String,
    /// The registry country it was generated for.
    pub country: Country,
    /// `false` when a digit was altered after computing the check digits.
    pub valid: bool,
}

/// Generates a batch of IBANs from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_batch(config: &GeneratorConfig) -> Vec<GeneratedIban> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| generate_one(config, &mut rng))
        .collect()
}

fn generate_one(config: &GeneratorConfig, rng: &mut StdRng) -> GeneratedIban {
    let country = Country::ALL
        .choose(rng)
        .copied()
        .unwrap_or(Country::Germany);
    let mut text = gen_valid_iban(rng, country);
    let mut valid = true;
    if rng.gen_bool(config.corrupt_fraction) {
        if let Some(corrupted) = corrupt_digit(rng, &text) {
            text = corrupted;
            valid = false;
        }
    }
    if rng.gen_bool(config.display_fraction) {
        text = to_display_form(&text);
    }
    GeneratedIban {
        text,
        country,
        valid,
    }
}
