//! Fee calculation
//!
//! Pricing is three flat steps applied in order:
//!
//! 1. base fee for the zone, whatever the weight
//! 2. heavy surcharge, once, when the weight is above the threshold
//! 3. insurance as a fraction of base + surcharge, when insured
//!
//! Weight is validated before the zone, so a call with both wrong reports
//! the weight.

use crate::error::{Error, Result};
use crate::rates::RateCard;
use crate::rates_validate::{validate_rates, Severity};
use crate::zone::Zone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fee for a raw request, priced with the default rate card
///
/// On error there is no fee; `unwrap_or_default()` gives `0.0`.
///
/// # Examples
/// ```
/// use shipfee::calculate_shipping_fee;
/// assert_eq!(calculate_shipping_fee(25.0, "Express", false).unwrap(), 37.5);
/// assert!(calculate_shipping_fee(50.1, "Express", false).is_err());
/// assert_eq!(calculate_shipping_fee(5.0, "domestic", false).unwrap_or_default(), 0.0);
/// ```
pub fn calculate_shipping_fee(weight_kg: f64, zone: &str, insured: bool) -> Result<f64> {
    FeeCalculator::default().calculate(weight_kg, zone, insured)
}

/// A typed pricing request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shipment {
    pub weight_kg: f64,
    pub zone: Zone,
    #[serde(default)]
    pub insured: bool,
}

impl Shipment {
    pub fn new(weight_kg: f64, zone: Zone, insured: bool) -> Self {
        Self {
            weight_kg,
            zone,
            insured,
        }
    }
}

/// Itemised fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Fee breakdown")]
pub struct FeeBreakdown {
    pub base: f64,
    pub surcharge: f64,
    pub insurance: f64,
    pub total: f64,
}

impl FeeBreakdown {
    /// Base plus surcharge, the amount insurance is charged on
    pub fn subtotal(&self) -> f64 {
        self.base + self.surcharge
    }

    pub fn to_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Base:       {:>10.4}\n", self.base));
        out.push_str(&format!("Surcharge:  {:>10.4}\n", self.surcharge));
        out.push_str(&format!("Insurance:  {:>10.4}\n", self.insurance));
        out.push_str(&format!("Total:      {:>10.4}\n", self.total));
        out
    }
}

/// Prices shipments against a rate card
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    rates: RateCard,
}

impl FeeCalculator {
    /// Calculator over a rate card taken as-is; see [`FeeCalculator::try_new`]
    pub fn new(rates: RateCard) -> Self {
        Self { rates }
    }

    /// Calculator over a rate card that passes [`validate_rates`]
    ///
    /// Cards with errors (negative fees, an empty weight range) are
    /// rejected; warnings are allowed.
    pub fn try_new(rates: RateCard) -> Result<Self> {
        let report = validate_rates(&rates);
        if report.has_errors() {
            let problems = report
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .map(|i| format!("{}: {}", i.code, i.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::RateParse(format!("invalid rate card: {}", problems)));
        }
        Ok(Self::new(rates))
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Price a typed shipment
    pub fn quote(&self, shipment: &Shipment) -> Result<FeeBreakdown> {
        self.check_weight(shipment.weight_kg)?;

        let base = self.rates.base_fee(shipment.zone);
        let surcharge = if self.rates.is_heavy(shipment.weight_kg) {
            self.rates.heavy_surcharge
        } else {
            0.0
        };
        let insurance = if shipment.insured {
            (base + surcharge) * self.rates.insurance_rate
        } else {
            0.0
        };
        let breakdown = FeeBreakdown {
            base,
            surcharge,
            insurance,
            total: base + surcharge + insurance,
        };

        log::debug!(
            "quote {} kg {} insured={} -> {}",
            shipment.weight_kg,
            shipment.zone,
            shipment.insured,
            breakdown.total
        );
        Ok(breakdown)
    }

    /// Itemise a raw request: weight is checked first, then the zone name
    pub fn price(&self, weight_kg: f64, zone: &str, insured: bool) -> Result<FeeBreakdown> {
        self.check_weight(weight_kg)?;
        let zone = Zone::parse(zone)?;
        self.quote(&Shipment::new(weight_kg, zone, insured))
    }

    /// Total fee for a raw request
    pub fn calculate(&self, weight_kg: f64, zone: &str, insured: bool) -> Result<f64> {
        self.price(weight_kg, zone, insured).map(|b| b.total)
    }

    fn check_weight(&self, weight_kg: f64) -> Result<()> {
        if self.rates.accepts_weight(weight_kg) {
            Ok(())
        } else {
            Err(Error::InvalidWeight {
                weight: weight_kg,
                max: self.rates.max_weight_kg,
            })
        }
    }
}
