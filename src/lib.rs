// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # shipfee: shipping fee calculation
//!
//! Prices a parcel from its weight, destination zone and insurance flag.
//!
//! ## Quick Start
//!
//! ```rust
//! use shipfee::{calculate_shipping_fee, FeeCalculator, Shipment, Zone};
//!
//! // Raw inputs, validated at the boundary
//! let fee = calculate_shipping_fee(15.0, "International", true)?;
//! assert!((fee - 27.9125).abs() < 1e-9);
//!
//! // Typed inputs, itemised result
//! let quote = FeeCalculator::default().quote(&Shipment::new(5.0, Zone::Domestic, false))?;
//! assert_eq!(quote.total, 5.0);
//! # Ok::<(), shipfee::Error>(())
//! ```
//!
//! ## Tariff
//!
//! | Step | Rule |
//! |------|------|
//! | Weight | must be in `(0, 50]` kg, else `invalid weight` |
//! | Zone | exactly `Domestic`, `International` or `Express`, else `invalid zone` |
//! | Base | 5.00 / 20.00 / 30.00 by zone, flat |
//! | Heavy surcharge | +7.50 once when weight > 10 kg |
//! | Insurance | +1.5% of base + surcharge when insured |
//!
//! The constants live in a [`RateCard`], loadable from YAML or JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  RateCard (YAML/JSON)                                       │
//! │       │                                                     │
//! │       ├──► validate_rates(card) ──► RateValidationReport    │
//! │       │                                                     │
//! │       └──► FeeCalculator                                    │
//! │                 │                                           │
//! │                 ├──► quote(shipment) ──► FeeBreakdown       │
//! │                 │                                           │
//! │                 └──► calculate(w, zone, insured) ──► f64    │
//! │                                                             │
//! │  CaseTable (YAML or standard_cases())                       │
//! │       │                                                     │
//! │       └──► check(table, calculator) ──► CheckReport         │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod cases;
pub mod error;
pub mod fee;
pub mod rates;
pub mod rates_validate;
pub mod zone;

// Re-exports
pub use cases::{
    check, standard_cases, CaseCategory, CaseTable, CheckReport, Expectation, FeeCase, Outcome,
};
pub use error::{Error, Result};
pub use fee::{calculate_shipping_fee, FeeBreakdown, FeeCalculator, Shipment};
pub use rates::{BaseFees, RateCard};
pub use rates_validate::{validate_rates, RateIssue, RateValidationReport, Severity};
pub use zone::Zone;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
