//! Runs the built-in merge scenarios and prints how many passed.
//!
//! Set `RECORD_MERGE_LOG=debug` (or `trace`) for per-scenario logging.

use std::env;
use std::process::ExitCode;

use record_merge::harness::{reference_scenarios, run_scenarios};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn log_level() -> LevelFilter {
    match env::var("RECORD_MERGE_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("off") => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn main() -> ExitCode {
    let _ = SimpleLogger::init(log_level(), Config::default());

    println!("\nTesting on different test cases...\n");
    match run_scenarios(&reference_scenarios()) {
        Ok(tally) => {
            println!("{tally}");
            if tally.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
