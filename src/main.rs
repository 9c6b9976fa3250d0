use std::io;
use std::process;

use classic_sorts::harness::{self, Config};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), harness::Error> {
    let config = Config::from_env()?;

    let stdout = io::stdout();
    let report = harness::run(&config, &mut stdout.lock())?;

    if !report.sorted {
        eprintln!("{} produced an unsorted result, seed: {}", report.algorithm, report.seed);
        process::exit(2);
    }

    Ok(())
}
