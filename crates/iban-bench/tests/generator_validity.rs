//! Tests that generated batches validate exactly as labelled, across tiers
//! and seeds.
#![allow(clippy::expect_used)]

use iban_bench::generator::GeneratedIban;
use iban_bench::{GeneratorConfig, SizeTier, generate_batch};
use iban_core::Violation;

fn assert_labels_hold(batch: &[GeneratedIban], label: &str) {
    for generated in batch {
        let violations = iban_core::validate(&generated.text);
        if generated.valid {
            assert!(
                violations.is_empty(),
                "{label}: {} should be valid: {violations:?}",
                generated.text
            );
        } else {
            assert_eq!(
                violations,
                vec![Violation::InvalidChecksum],
                "{label}: {}",
                generated.text
            );
        }
        assert_eq!(
            iban_core::country_code(&generated.text),
            Some(generated.country),
            "{label}: {}",
            generated.text
        );
    }
}

#[test]
fn generated_small_matches_labels() {
    for seed in [42, 123, 999, 7777, 54321] {
        let batch = generate_batch(&SizeTier::Small.config(seed));
        assert_eq!(batch.len(), 100);
        assert_labels_hold(&batch, &format!("Small/seed={seed}"));
    }
}

#[test]
fn generated_medium_matches_labels() {
    let batch = generate_batch(&SizeTier::Medium.config(42));
    assert_labels_hold(&batch, "Medium/seed=42");
}

#[test]
fn generation_is_deterministic() {
    let a = generate_batch(&SizeTier::Small.config(42));
    let b = generate_batch(&SizeTier::Small.config(42));
    assert_eq!(a, b, "same seed must produce identical output");
}

#[test]
fn different_seeds_differ() {
    let a = generate_batch(&SizeTier::Small.config(1));
    let b = generate_batch(&SizeTier::Small.config(2));
    assert_ne!(a, b);
}

#[test]
fn fractions_are_respected_at_the_extremes() {
    let all_clean = GeneratorConfig {
        seed: 5,
        count: 200,
        corrupt_fraction: 0.0,
        display_fraction: 0.0,
    };
    let batch = generate_batch(&all_clean);
    assert!(batch.iter().all(|g| g.valid));
    assert!(batch.iter().all(|g| !g.text.contains(' ')));

    let all_display = GeneratorConfig {
        display_fraction: 1.0,
        ..all_clean
    };
    let batch = generate_batch(&all_display);
    assert!(batch.iter().all(|g| g.text.contains(' ')));
    assert!(batch.iter().all(|g| g.text == g.text.to_lowercase()));
}

#[test]
fn medium_tier_mixes_valid_and_invalid() {
    let batch = generate_batch(&SizeTier::Medium.config(42));
    let invalid = batch.iter().filter(|g| !g.valid).count();
    assert!(invalid > 500 && invalid < 1500, "invalid = {invalid}");
}

proptest::proptest! {
    #[test]
    fn any_seed_matches_labels(seed in proptest::prelude::any::<u64>()) {
        let config = GeneratorConfig {
            seed,
            count: 20,
            corrupt_fraction: 0.5,
            display_fraction: 0.5,
        };
        assert_labels_hold(&generate_batch(&config), &format!("seed={seed}"));
    }
}
