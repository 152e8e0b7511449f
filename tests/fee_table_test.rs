//! Data-driven tests for shipping fee calculation
//!
//! Equivalence partitions, boundary values and decision table rows, each
//! checked through the raw string entry point.

use rstest::rstest;
use shipfee::{calculate_shipping_fee, Error};

const TOLERANCE: f64 = 0.0001;

// ============================================================================
// Valid inputs
// ============================================================================

#[rstest]
// P2: standard package
#[case("P2 mid range", 5.0, "Domestic", false, 5.0)]
#[case("P2 with insurance", 8.0, "International", true, 20.3)]
// P3: heavy package
#[case("P3 mid range", 25.0, "Express", false, 37.5)]
#[case("P3 with insurance", 15.0, "International", true, 27.9125)]
// P5: every zone at the standard upper boundary
#[case("P5 Domestic", 10.0, "Domestic", false, 5.0)]
#[case("P5 International", 10.0, "International", false, 20.0)]
#[case("P5 Express", 10.0, "Express", false, 30.0)]
// Boundaries
#[case("BVA just above 0", 0.1, "Domestic", false, 5.0)]
#[case("BVA at 10", 10.0, "International", false, 20.0)]
#[case("BVA just above 10", 10.1, "International", false, 27.5)]
#[case("BVA at 50", 50.0, "Express", false, 37.5)]
// Decision table
#[case("standard domestic insured", 5.0, "Domestic", true, 5.075)]
#[case("heavy international uninsured", 20.0, "International", false, 27.5)]
#[case("heavy express insured", 30.0, "Express", true, 38.0625)]
#[case("max weight express insured", 50.0, "Express", true, 38.0625)]
#[case("min weight domestic", 0.1, "Domestic", false, 5.0)]
fn test_valid_fees(
    #[case] name: &str,
    #[case] weight: f64,
    #[case] zone: &str,
    #[case] insured: bool,
    #[case] expected: f64,
) {
    let fee = calculate_shipping_fee(weight, zone, insured)
        .unwrap_or_else(|e| panic!("{}: unexpected error: {}", name, e));
    assert!(
        (fee - expected).abs() <= TOLERANCE,
        "{}: expected fee {}, got {}",
        name,
        expected,
        fee
    );
}

// ============================================================================
// Invalid inputs
// ============================================================================

#[rstest]
// P1 / P4: weight outside (0, 50]
#[case("P1 negative", -5.0, "Domestic", false, "invalid weight")]
#[case("P1 zero", 0.0, "International", true, "invalid weight")]
#[case("P4 too large", 100.0, "Domestic", false, "invalid weight")]
#[case("BVA just above 50", 50.1, "Express", false, "invalid weight")]
// P6: zone outside the closed set
#[case("P6 empty", 10.0, "", false, "invalid zone")]
#[case("P6 wrong case", 10.0, "domestic", false, "invalid zone")]
#[case("P6 unknown", 10.0, "Local", false, "invalid zone")]
// Weight is reported when both are wrong
#[case("both invalid", 0.0, "Local", true, "invalid weight")]
#[case("both invalid high", 50.1, "express", false, "invalid weight")]
fn test_invalid_inputs(
    #[case] name: &str,
    #[case] weight: f64,
    #[case] zone: &str,
    #[case] insured: bool,
    #[case] contains: &str,
) {
    let result = calculate_shipping_fee(weight, zone, insured);
    let err = match &result {
        Ok(fee) => panic!("{}: expected error containing '{}', got fee {}", name, contains, fee),
        Err(e) => e.to_string(),
    };
    assert!(
        err.contains(contains),
        "{}: expected error to contain '{}', got '{}'",
        name,
        contains,
        err
    );
    assert_eq!(result.unwrap_or_default(), 0.0, "{}: fee on error", name);
}

#[rstest]
#[case(0.0)]
#[case(-0.0)]
#[case(-1e-9)]
#[case(50.000001)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn test_weight_outside_range_is_invalid_weight(#[case] weight: f64) {
    for zone in ["Domestic", "International", "Express", "nowhere"] {
        for insured in [false, true] {
            let err = calculate_shipping_fee(weight, zone, insured).unwrap_err();
            assert!(
                matches!(err, Error::InvalidWeight { .. }),
                "weight {} zone {:?}: {:?}",
                weight,
                zone,
                err
            );
        }
    }
}
