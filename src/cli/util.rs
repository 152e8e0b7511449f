//! CLI utility helpers

use shipfee::{Error, FeeCalculator, RateCard, Result};
use std::path::PathBuf;

/// Flags that consume the following argument
const VALUE_FLAGS: [&str; 2] = ["--rates", "-r"];

/// Whether a bare flag is present
pub fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|a| names.contains(&a.as_str()))
}

/// Value following a flag, if any; another `--` flag is not a value
pub fn flag_value(args: &[String], names: &[&str]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if names.contains(&arg.as_str()) {
            return args.get(i + 1).filter(|v| !v.starts_with("--")).cloned();
        }
    }
    None
}

/// Arguments that are neither flags nor flag values
///
/// Only `--`-prefixed words count as flags so negative weights such as
/// `-5` stay positional.
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

/// Rate card from `--rates FILE`, or the default tariff
pub fn load_rates(args: &[String]) -> Result<RateCard> {
    match flag_value(args, &VALUE_FLAGS) {
        Some(path) => RateCard::load(&PathBuf::from(path)),
        None if has_flag(args, &VALUE_FLAGS) => Err("--rates needs a file path".into()),
        None => Ok(RateCard::default()),
    }
}

/// Calculator over the selected rate card, refusing cards with errors
pub fn load_calculator(args: &[String]) -> Result<FeeCalculator> {
    FeeCalculator::try_new(load_rates(args)?)
}

/// Parse a weight argument
pub fn parse_weight(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::Other(format!("invalid weight: '{}' is not a number", raw)))
}
