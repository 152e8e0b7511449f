//! Table-driven fee cases
//!
//! A case table pairs raw inputs with the outcome they must produce,
//! either a fee (within a tolerance) or an error whose message contains a
//! given substring. Tables can be loaded from YAML:
//!
//! ```yaml
//! tolerance: 0.0001
//! cases:
//!   - name: "Heavy package with insurance"
//!     category: partition
//!     weight: 15
//!     zone: International
//!     insured: true
//!     expect:
//!       fee: 27.9125
//!   - name: "Just above upper boundary"
//!     category: boundary
//!     weight: 50.1
//!     zone: Express
//!     expect:
//!       error: invalid weight
//! ```
//!
//! [`standard_cases`] is the built-in table covering every equivalence
//! partition, the weight boundaries and the zone/weight/insurance
//! decision table.

use crate::error::{Error, Result};
use crate::fee::FeeCalculator;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_tolerance() -> f64 {
    0.0001
}

/// Which test design technique a case comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    Partition,
    Boundary,
    DecisionTable,
    EdgeCase,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 4] = [
        CaseCategory::Partition,
        CaseCategory::Boundary,
        CaseCategory::DecisionTable,
        CaseCategory::EdgeCase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CaseCategory::Partition => "equivalence partitions",
            CaseCategory::Boundary => "boundary values",
            CaseCategory::DecisionTable => "decision table",
            CaseCategory::EdgeCase => "edge cases",
        }
    }
}

/// Required outcome of a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Succeeds with this fee
    Fee(f64),
    /// Fails with a message containing this text
    Error(String),
}

/// One row of a case table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeeCase {
    pub name: String,
    pub category: CaseCategory,
    pub weight: f64,
    /// Raw zone name, parsed when the case runs
    pub zone: String,
    #[serde(default)]
    pub insured: bool,
    #[serde(with = "serde_norway::with::singleton_map")]
    #[schemars(with = "Expectation")]
    pub expect: Expectation,
}

impl FeeCase {
    pub fn fee(
        name: &str,
        category: CaseCategory,
        weight: f64,
        zone: &str,
        insured: bool,
        fee: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            weight,
            zone: zone.to_string(),
            insured,
            expect: Expectation::Fee(fee),
        }
    }

    pub fn error(
        name: &str,
        category: CaseCategory,
        weight: f64,
        zone: &str,
        insured: bool,
        contains: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            weight,
            zone: zone.to_string(),
            insured,
            expect: Expectation::Error(contains.to_string()),
        }
    }
}

/// A set of cases sharing a fee tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Case table", description = "Table-driven shipping fee cases")]
pub struct CaseTable {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub cases: Vec<FeeCase>,
}

impl CaseTable {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::CaseParse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::CaseParse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }
}

/// What a case actually produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Fee(f64),
    Error(String),
}

/// A case whose outcome did not meet its expectation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaseFailure {
    pub name: String,
    pub category: CaseCategory,
    #[serde(with = "serde_norway::with::singleton_map")]
    #[schemars(with = "Expectation")]
    pub expected: Expectation,
    #[serde(with = "serde_norway::with::singleton_map")]
    #[schemars(with = "Outcome")]
    pub actual: Outcome,
}

/// Pass counts for one category
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryTally {
    pub category: CaseCategory,
    pub passed: usize,
    pub total: usize,
}

/// Result of running a case table
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Check report")]
pub struct CheckReport {
    pub passed: bool,
    pub total: usize,
    pub passed_count: usize,
    pub failures: Vec<CaseFailure>,
    pub categories: Vec<CategoryTally>,
    /// Fingerprint of the rate card the cases ran against
    pub rate_fingerprint: String,
    #[schemars(with = "String")]
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        let status = if self.passed {
            "✓ PASSED"
        } else {
            "✗ FAILED"
        };
        out.push_str(&format!("Fee check: {}\n", status));
        out.push_str(&format!(
            "Cases: {}/{} passed (rates {})\n",
            self.passed_count, self.total, self.rate_fingerprint
        ));

        for tally in &self.categories {
            out.push_str(&format!(
                "  {:<24} {}/{}\n",
                tally.category.label(),
                tally.passed,
                tally.total
            ));
        }

        if !self.failures.is_empty() {
            out.push_str("\nFailures:\n");
            for failure in &self.failures {
                let expected = match &failure.expected {
                    Expectation::Fee(fee) => format!("fee {}", fee),
                    Expectation::Error(text) => format!("error containing '{}'", text),
                };
                let actual = match &failure.actual {
                    Outcome::Fee(fee) => format!("fee {}", fee),
                    Outcome::Error(msg) => format!("error '{}'", msg),
                };
                out.push_str(&format!("  {}\n", failure.name));
                out.push_str(&format!("    expected {}, got {}\n", expected, actual));
            }
        }

        out
    }
}

/// Whether an outcome satisfies an expectation
pub fn outcome_matches(expected: &Expectation, actual: &Outcome, tolerance: f64) -> bool {
    match (expected, actual) {
        (Expectation::Fee(want), Outcome::Fee(got)) => (got - want).abs() <= tolerance,
        (Expectation::Error(text), Outcome::Error(msg)) => msg.contains(text.as_str()),
        _ => false,
    }
}

/// Run every case of a table through a calculator
pub fn check(table: &CaseTable, calculator: &FeeCalculator) -> CheckReport {
    let mut failures = Vec::new();
    let mut categories: Vec<CategoryTally> = CaseCategory::ALL
        .iter()
        .map(|&category| CategoryTally {
            category,
            passed: 0,
            total: 0,
        })
        .collect();

    for case in &table.cases {
        let actual = match calculator.calculate(case.weight, &case.zone, case.insured) {
            Ok(fee) => Outcome::Fee(fee),
            Err(e) => Outcome::Error(e.to_string()),
        };
        let ok = outcome_matches(&case.expect, &actual, table.tolerance);

        if let Some(tally) = categories.iter_mut().find(|t| t.category == case.category) {
            tally.total += 1;
            if ok {
                tally.passed += 1;
            }
        }

        if !ok {
            log::debug!("case '{}' failed: {:?}", case.name, actual);
            failures.push(CaseFailure {
                name: case.name.clone(),
                category: case.category,
                expected: case.expect.clone(),
                actual,
            });
        }
    }

    categories.retain(|t| t.total > 0);
    let total = table.cases.len();
    let passed_count = total - failures.len();
    log::info!("checked {} case(s), {} failed", total, failures.len());

    CheckReport {
        passed: failures.is_empty(),
        total,
        passed_count,
        failures,
        categories,
        rate_fingerprint: calculator.rates().fingerprint(),
        checked_at: Utc::now(),
    }
}

/// The built-in case table for the default rate card
#[rustfmt::skip]
pub fn standard_cases() -> CaseTable {
    use CaseCategory::*;

    let cases = vec![
        // P1: weight too small
        FeeCase::error("P1: Invalid weight - negative", Partition, -5.0, "Domestic", false, "invalid weight"),
        FeeCase::error("P1: Invalid weight - zero", Partition, 0.0, "International", true, "invalid weight"),
        // P2: standard package, 0 < weight <= 10
        FeeCase::fee("P2: Standard package - mid range", Partition, 5.0, "Domestic", false, 5.0),
        FeeCase::fee("P2: Standard package - with insurance", Partition, 8.0, "International", true, 20.3),
        // P3: heavy package, 10 < weight <= 50
        FeeCase::fee("P3: Heavy package - mid range", Partition, 25.0, "Express", false, 37.5),
        FeeCase::fee("P3: Heavy package - with insurance", Partition, 15.0, "International", true, 27.9125),
        // P4: weight too large
        FeeCase::error("P4: Invalid weight - too large", Partition, 100.0, "Domestic", false, "invalid weight"),
        // P5: valid zones
        FeeCase::fee("P5: Valid zone - Domestic", Partition, 10.0, "Domestic", false, 5.0),
        FeeCase::fee("P5: Valid zone - International", Partition, 10.0, "International", false, 20.0),
        FeeCase::fee("P5: Valid zone - Express", Partition, 10.0, "Express", false, 30.0),
        // P6: invalid zones
        FeeCase::error("P6: Invalid zone - empty string", Partition, 10.0, "", false, "invalid zone"),
        FeeCase::error("P6: Invalid zone - wrong case", Partition, 10.0, "domestic", false, "invalid zone"),
        FeeCase::error("P6: Invalid zone - unknown", Partition, 10.0, "Local", false, "invalid zone"),
        // Weight boundaries at 0, 10 and 50
        FeeCase::error("BVA: Weight at lower invalid boundary", Boundary, 0.0, "Domestic", false, "invalid weight"),
        FeeCase::fee("BVA: Weight just above lower boundary", Boundary, 0.1, "Domestic", false, 5.0),
        FeeCase::fee("BVA: Weight at standard upper boundary", Boundary, 10.0, "International", false, 20.0),
        FeeCase::fee("BVA: Weight just above standard boundary", Boundary, 10.1, "International", false, 27.5),
        FeeCase::fee("BVA: Weight at upper valid boundary", Boundary, 50.0, "Express", false, 37.5),
        FeeCase::error("BVA: Weight just above upper boundary", Boundary, 50.1, "Express", false, "invalid weight"),
        // Zone x weight class x insurance
        FeeCase::fee("Decision table: Standard + Domestic + Insured", DecisionTable, 5.0, "Domestic", true, 5.075),
        FeeCase::fee("Decision table: Heavy + International + Not insured", DecisionTable, 20.0, "International", false, 27.5),
        FeeCase::fee("Decision table: Heavy + Express + Insured", DecisionTable, 30.0, "Express", true, 38.0625),
        FeeCase::error("Decision table: Invalid weight + Invalid zone", DecisionTable, 0.0, "Local", false, "invalid weight"),
        // Extremes
        FeeCase::fee("Edge case: Maximum weight + Express + Insured", EdgeCase, 50.0, "Express", true, 38.0625),
        FeeCase::fee("Edge case: Minimum weight + cheapest zone", EdgeCase, 0.1, "Domestic", false, 5.0),
    ];

    CaseTable {
        tolerance: default_tolerance(),
        cases,
    }
}
