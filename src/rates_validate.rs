//! Rate card validation
//!
//! Catches tariffs that cannot price anything sensibly before they are
//! used: negative fees, an empty weight range, a threshold outside it.

use crate::rates::RateCard;
use serde::Serialize;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in a rate card
#[derive(Debug, Clone, Serialize)]
pub struct RateIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl RateIssue {
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn warning(code: &str, message: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result of rate card validation
#[derive(Debug, Default, Serialize)]
pub struct RateValidationReport {
    pub issues: Vec<RateIssue>,
}

impl RateValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn to_report(&self) -> String {
        if self.issues.is_empty() {
            return "Rate card: ✓ valid\n".to_string();
        }

        let mut out = format!(
            "Rate card: {} error(s), {} warning(s)\n",
            self.error_count(),
            self.warning_count()
        );
        for issue in &self.issues {
            let tag = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            out.push_str(&format!("  {}[{}]: {}\n", tag, issue.code, issue.message));
        }
        out
    }
}

/// Validate a rate card
pub fn validate_rates(card: &RateCard) -> RateValidationReport {
    let mut report = RateValidationReport::default();

    let amounts = [
        ("base.domestic", card.base.domestic),
        ("base.international", card.base.international),
        ("base.express", card.base.express),
        ("heavy_surcharge", card.heavy_surcharge),
        ("insurance_rate", card.insurance_rate),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            report.issues.push(RateIssue::error(
                "E001",
                &format!("{} must be a non-negative number, got {}", field, value),
            ));
        }
    }

    // Nothing else is meaningful without a usable weight range
    if !card.max_weight_kg.is_finite() || card.max_weight_kg <= 0.0 {
        report.issues.push(RateIssue::error(
            "E002",
            &format!(
                "max_weight_kg must be a positive number, got {}",
                card.max_weight_kg
            ),
        ));
        return report;
    }

    if !(card.heavy_threshold_kg >= 0.0 && card.heavy_threshold_kg < card.max_weight_kg) {
        report.issues.push(RateIssue::error(
            "E003",
            &format!(
                "heavy_threshold_kg must be in [0, {}), got {}",
                card.max_weight_kg, card.heavy_threshold_kg
            ),
        ));
    }

    if card.insurance_rate >= 1.0 {
        report.issues.push(RateIssue::warning(
            "W001",
            &format!(
                "insurance_rate {} charges at least the full shipping cost",
                card.insurance_rate
            ),
        ));
    }

    let base = &card.base;
    if base.domestic > base.international || base.international > base.express {
        report.issues.push(RateIssue::warning(
            "W002",
            "base fees are not ordered Domestic <= International <= Express",
        ));
    }

    report
}
