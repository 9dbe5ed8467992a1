//! Rust Ledger Service CLI
//!
//! Command-line interface for operating an in-memory ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                          # interactive menu on stdin
//! cargo run -- menu_input.txt                        # interactive menu read from a file
//! cargo run -- --mode batch script.csv > balances.csv
//! cargo run -- --mode batch --report transactions --scale 4 script.csv
//! RUST_LOG=debug cargo run -- --mode batch script.csv
//! ```
//!
//! Menus, prompts and reports go to stdout; log events go to stderr.
//!
//! # Frontends
//!
//! - **interactive**: Numbered console menu (default)
//! - **batch**: Replays a CSV script and writes a balances or transactions report
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use rust_ledger_service::cli;
use rust_ledger_service::logging;
use rust_ledger_service::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let strategy = strategy::create_strategy(args.frontend.clone(), args.to_frontend_config());

    let mut input = match strategy::open_input(args.input_file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
