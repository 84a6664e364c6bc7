use std::env;
use std::io::{self, IsTerminal};

use anyhow::Result;
use log::debug;

use donato::donations::ledger::Ledger;
use donato::donations::report;
use donato::input;

fn main() -> Result<()> {
    env_logger::init();

    let mut ledger = Ledger::new();

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        input::process_lines(stdin.lock(), &mut ledger)?;
    } else {
        let args: Vec<String> = env::args().collect();
        if args.len() != 2 {
            eprintln!("Usage: cargo run -- <input_file>");
            std::process::exit(1);
        }

        input::process_file(&args[1], &mut ledger)?;
    }

    let snapshot = serde_json::to_string_pretty(&ledger.snapshot())?;
    debug!("{snapshot}");

    if ledger.has_any_data() {
        println!("{}", report::build_report(&ledger));
    }

    Ok(())
}
