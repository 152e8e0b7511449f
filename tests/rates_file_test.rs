//! Tests for loading rate cards and case tables from disk

use pretty_assertions::assert_eq;
use shipfee::{
    check, standard_cases, validate_rates, BaseFees, CaseTable, Error, FeeCalculator, RateCard,
    Shipment, Zone,
};
use tempfile::TempDir;

#[test]
fn test_load_yaml_rate_card() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.yaml");
    std::fs::write(
        &path,
        r#"
base:
  domestic: 6.0
  international: 22.0
  express: 35.0
heavy_surcharge: 10.0
"#,
    )
    .unwrap();

    let card = RateCard::load(&path).unwrap();
    assert_eq!(
        card,
        RateCard {
            base: BaseFees {
                domestic: 6.0,
                international: 22.0,
                express: 35.0,
            },
            heavy_surcharge: 10.0,
            ..RateCard::default()
        }
    );

    let quote = FeeCalculator::new(card)
        .quote(&Shipment::new(12.0, Zone::Express, false))
        .unwrap();
    assert_eq!(quote.total, 45.0);
}

#[test]
fn test_load_json_rate_card() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.json");
    std::fs::write(&path, r#"{"max_weight_kg": 30.0, "insurance_rate": 0.02}"#).unwrap();

    let card = RateCard::load(&path).unwrap();
    assert_eq!(card.max_weight_kg, 30.0);
    assert_eq!(card.insurance_rate, 0.02);
    assert_eq!(card.base, BaseFees::default());

    let calc = FeeCalculator::new(card);
    assert!(matches!(
        calc.calculate(40.0, "Domestic", false),
        Err(Error::InvalidWeight { .. })
    ));
}

#[test]
fn test_missing_rate_card_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = RateCard::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_loaded_card_is_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rates.yaml");
    std::fs::write(&path, "heavy_threshold_kg: 60.0\n").unwrap();

    let report = validate_rates(&RateCard::load(&path).unwrap());
    assert!(!report.is_valid());
    assert_eq!(report.issues[0].code, "E003");
}

#[test]
fn test_standard_cases_survive_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cases.yaml");
    let table = standard_cases();
    std::fs::write(&path, table.to_yaml().unwrap()).unwrap();

    let loaded = CaseTable::load(&path).unwrap();
    assert_eq!(loaded, table);

    let report = check(&loaded, &FeeCalculator::default());
    assert!(report.passed, "{}", report.to_report());
    assert_eq!(report.total, table.cases.len());
}

#[test]
fn test_check_report_carries_rate_fingerprint() {
    let mut rates = RateCard::default();
    rates.base.domestic = 5.5;
    let fingerprint = rates.fingerprint();

    let report = check(&standard_cases(), &FeeCalculator::new(rates));
    assert_eq!(report.rate_fingerprint, fingerprint);
    assert!(!report.passed);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rate_fingerprint"], fingerprint);
    assert_eq!(json["passed"], false);
}
