//! Rate card: every tariff constant the calculator uses
//!
//! The default card is the published tariff:
//!
//! ```yaml
//! base:
//!   domestic: 5.0
//!   international: 20.0
//!   express: 30.0
//! heavy_threshold_kg: 10.0
//! heavy_surcharge: 7.5
//! insurance_rate: 0.015
//! max_weight_kg: 50.0
//! ```
//!
//! A card file may set any subset of these fields; the rest keep their
//! defaults.

use crate::error::{Error, Result};
use crate::zone::Zone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Flat base fee per zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BaseFees {
    pub domestic: f64,
    pub international: f64,
    pub express: f64,
}

impl Default for BaseFees {
    fn default() -> Self {
        Self {
            domestic: 5.00,
            international: 20.00,
            express: 30.00,
        }
    }
}

/// Complete tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Rate card", description = "Shipping tariff constants")]
#[serde(default)]
pub struct RateCard {
    /// Base fee by zone, independent of weight
    pub base: BaseFees,

    /// Surcharge applies to weights strictly above this
    pub heavy_threshold_kg: f64,

    /// Flat surcharge for heavy packages
    pub heavy_surcharge: f64,

    /// Fraction of base + surcharge charged for insurance
    pub insurance_rate: f64,

    /// Largest accepted weight (inclusive)
    pub max_weight_kg: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base: BaseFees::default(),
            heavy_threshold_kg: 10.0,
            heavy_surcharge: 7.50,
            insurance_rate: 0.015,
            max_weight_kg: 50.0,
        }
    }
}

impl RateCard {
    /// Base fee for a zone
    pub fn base_fee(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Domestic => self.base.domestic,
            Zone::International => self.base.international,
            Zone::Express => self.base.express,
        }
    }

    /// Whether a weight is inside `(0, max_weight_kg]`
    ///
    /// Written as a positive range test so NaN is rejected.
    pub fn accepts_weight(&self, weight_kg: f64) -> bool {
        weight_kg > 0.0 && weight_kg <= self.max_weight_kg
    }

    /// Whether a weight attracts the heavy surcharge
    pub fn is_heavy(&self, weight_kg: f64) -> bool {
        weight_kg > self.heavy_threshold_kg
    }

    /// Parse a rate card from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::RateParse(e.to_string()))
    }

    /// Serialize the rate card to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::RateParse(e.to_string()))
    }

    /// Parse a rate card from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::RateParse(e.to_string()))
    }

    /// Load a rate card file; `.json` is read as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let card = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        log::info!(
            "loaded rate card {} ({})",
            path.display(),
            card.fingerprint()
        );
        Ok(card)
    }

    /// Short content hash identifying this tariff
    pub fn fingerprint(&self) -> String {
        let content = self.to_yaml().unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}
