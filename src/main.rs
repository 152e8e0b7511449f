//! shipfee CLI - Command-line interface
//!
//! Commands:
//!   quote    - Price one parcel
//!   check    - Run a fee case table
//!   rates    - Show and validate a rate card
//!   schema   - Print JSON schemas

mod cli;

use shipfee::VERSION;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "quote" => cli::cmd_quote(&args[2..]),
        "check" => cli::cmd_check(&args[2..]),
        "rates" => cli::cmd_rates(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("shipfee {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
shipfee - Shipping fee calculator

USAGE:
    shipfee <COMMAND> [OPTIONS]

COMMANDS:
    quote <weight> <zone>            Price one parcel (zone: Domestic, International, Express)
    check [cases.yaml]               Run a fee case table (built-in table if omitted)
    rates [rates.yaml]               Print and validate a rate card (default tariff if omitted)
    schema [name]                    Print JSON schema (rates, quote, cases, check)
    version                          Print version

OPTIONS:
    --insured                        Add insurance (quote)
    --rates <file>                   Price with a rate card file, YAML or JSON (quote, check)
    --json                           JSON output format (quote, check, rates)
    --strict                         Treat rate card warnings as errors (rates)

ENVIRONMENT:
    RUST_LOG                         Log filter, e.g. RUST_LOG=shipfee=debug

EXAMPLES:
    shipfee quote 15 International --insured
    shipfee check
    shipfee check cases.yaml --rates rates.yaml --json
    shipfee rates custom.yaml --strict
"#
    );
}
