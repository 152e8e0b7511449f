//! Rate card and schema CLI commands

use super::util::{has_flag, positional_args};
use shipfee::*;
use std::path::Path;

pub fn cmd_rates(args: &[String]) -> Result<()> {
    let strict = has_flag(args, &["--strict"]);
    let json_output = has_flag(args, &["--json"]);

    let card = match positional_args(args).first() {
        Some(path) => RateCard::load(Path::new(path))?,
        None => RateCard::default(),
    };
    let report = validate_rates(&card);

    if json_output {
        let output = serde_json::json!({
            "fingerprint": card.fingerprint(),
            "rates": card,
            "valid": report.is_valid(),
            "issues": report.issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("# fingerprint: {}", card.fingerprint());
        print!("{}", card.to_yaml()?);
        println!();
        print!("{}", report.to_report());
    }

    if report.has_errors() {
        return Err("Rate card validation failed".into());
    }
    if strict && report.has_warnings() {
        return Err("Rate card has warnings (strict mode)".into());
    }
    Ok(())
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: rates, quote, cases, check");
            Ok(())
        }
        "rates" => print_schema::<RateCard>(),
        "quote" => print_schema::<FeeBreakdown>(),
        "cases" => print_schema::<CaseTable>(),
        "check" => print_schema::<CheckReport>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
