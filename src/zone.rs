//! Shipping zones
//!
//! A zone is a closed set. Raw strings are only accepted at the boundary
//! through [`Zone::parse`], which matches the canonical names exactly:
//! `"domestic"`, `""` and `" Domestic"` are all rejected.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping destination category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Zone {
    Domestic,
    International,
    Express,
}

impl Zone {
    /// Every zone, cheapest first
    pub const ALL: [Zone; 3] = [Zone::Domestic, Zone::International, Zone::Express];

    /// Parse a raw zone name (case-sensitive, exact match)
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Domestic" => Ok(Zone::Domestic),
            "International" => Ok(Zone::International),
            "Express" => Ok(Zone::Express),
            other => Err(Error::InvalidZone(other.to_string())),
        }
    }

    /// Canonical name
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Domestic => "Domestic",
            Zone::International => "International",
            Zone::Express => "Express",
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Zone::parse(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
