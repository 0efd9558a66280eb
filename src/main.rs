//! Metrica - Scansion of Spanish poems

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = metrica::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
