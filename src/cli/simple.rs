//! Pricing commands: quote, check

use super::util::{has_flag, load_calculator, parse_weight, positional_args};
use shipfee::*;
use std::path::Path;

pub fn cmd_quote(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    if positional.len() < 2 {
        return Err(
            "Usage: shipfee quote <weight> <zone> [--insured] [--rates FILE] [--json]".into(),
        );
    }

    let weight = parse_weight(positional[0])?;
    let insured = has_flag(args, &["--insured"]);
    let json_output = has_flag(args, &["--json"]);
    let calculator = load_calculator(args)?;

    let breakdown = calculator.price(weight, positional[1], insured)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!(
            "{} kg, {}{}",
            weight,
            positional[1],
            if insured { ", insured" } else { "" }
        );
        print!("{}", breakdown.to_report());
    }
    Ok(())
}

pub fn cmd_check(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let json_output = has_flag(args, &["--json"]);
    let calculator = load_calculator(args)?;

    let table = match positional.first() {
        Some(path) => CaseTable::load(Path::new(path))?,
        None => standard_cases(),
    };

    let report = check(&table, &calculator);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_report());
    }

    if report.passed {
        Ok(())
    } else {
        Err(format!("{} case(s) failed", report.failures.len()).into())
    }
}
