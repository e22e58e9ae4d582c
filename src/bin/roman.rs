use anyhow::Result;
use roman_numerals::cli::run;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    run()
}
