//! Property-based tests for fee calculation
//!
//! Uses proptest to sweep the weight range and check the tariff shape

use proptest::prelude::*;
use shipfee::{calculate_shipping_fee, Error, FeeCalculator, Shipment, Zone};

fn any_zone() -> impl Strategy<Value = Zone> {
    prop_oneof![
        Just(Zone::Domestic),
        Just(Zone::International),
        Just(Zone::Express),
    ]
}

fn base_of(zone: Zone) -> f64 {
    match zone {
        Zone::Domestic => 5.0,
        Zone::International => 20.0,
        Zone::Express => 30.0,
    }
}

proptest! {
    #[test]
    fn test_standard_band_is_flat(weight in 0.001f64..=10.0, zone in any_zone()) {
        let fee = calculate_shipping_fee(weight, zone.as_str(), false).unwrap();
        prop_assert_eq!(fee, base_of(zone));
    }

    #[test]
    fn test_heavy_band_adds_surcharge_once(weight in 10.001f64..=50.0, zone in any_zone()) {
        let fee = calculate_shipping_fee(weight, zone.as_str(), false).unwrap();
        prop_assert_eq!(fee, base_of(zone) + 7.5);
    }

    #[test]
    fn test_insurance_is_one_and_a_half_percent(weight in 0.001f64..=50.0, zone in any_zone()) {
        let plain = calculate_shipping_fee(weight, zone.as_str(), false).unwrap();
        let insured = calculate_shipping_fee(weight, zone.as_str(), true).unwrap();
        prop_assert!((insured - plain * 1.015).abs() < 1e-9);
    }

    #[test]
    fn test_too_heavy_is_invalid_weight(weight in 50.0001f64..1e9, zone in any_zone(), insured in any::<bool>()) {
        let err = calculate_shipping_fee(weight, zone.as_str(), insured).unwrap_err();
        let is_weight = matches!(err, Error::InvalidWeight { .. });
        prop_assert!(is_weight, "{:?}", err);
    }

    #[test]
    fn test_non_positive_is_invalid_weight(weight in -1e9f64..=0.0, zone in ".*", insured in any::<bool>()) {
        let err = calculate_shipping_fee(weight, &zone, insured).unwrap_err();
        let is_weight = matches!(err, Error::InvalidWeight { .. });
        prop_assert!(is_weight, "{:?}", err);
    }

    #[test]
    fn test_unknown_zone_is_invalid_zone(zone in "[a-zA-Z ]{0,16}") {
        prop_assume!(Zone::parse(&zone).is_err());
        let err = calculate_shipping_fee(5.0, &zone, false).unwrap_err();
        prop_assert!(err.to_string().contains("invalid zone"));
    }

    #[test]
    fn test_quote_is_idempotent(weight in 0.001f64..=50.0, zone in any_zone(), insured in any::<bool>()) {
        let calc = FeeCalculator::default();
        let shipment = Shipment::new(weight, zone, insured);
        let first = calc.quote(&shipment).unwrap();
        let second = calc.quote(&shipment).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.total, calc.calculate(weight, zone.as_str(), insured).unwrap());
    }

    #[test]
    fn test_fee_never_below_base(weight in 0.001f64..=50.0, zone in any_zone(), insured in any::<bool>()) {
        let fee = calculate_shipping_fee(weight, zone.as_str(), insured).unwrap();
        prop_assert!(fee >= base_of(zone));
    }
}
