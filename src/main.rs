use cidr_calc::evaluate;
use cidr_calc::output::print_report;
use cidr_calc::CalculatorState;
use colored::Colorize;
use log4rs;
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main()");

    let mut json = false;
    let mut target: Option<String> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other).into());
            }
            other => target = Some(other.to_string()),
        }
    }

    let view = match target {
        Some(t) => evaluate(&t).map_err(|e| {
            println!("{} {}", "Error".on_red(), e.to_string().red());
            e
        })?,
        // No target: report the engine's default example state.
        None => CalculatorState::new().derived(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_report(&view);
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: cidr-calc [--json] [ADDRESS[/PREFIX]]");
    println!("  ADDRESS   IPv4 dotted quad, or IPv6 as 8 full hex groups");
    println!("  PREFIX    0-32 for IPv4, 0-128 for IPv6 (default 24 / 64)");
    println!("  --json    print the derived view as JSON instead of a report");
}
