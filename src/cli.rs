//! Command-line front end.
//!
//! Thin caller over the conversion core: reads raw text, invokes the
//! validator and converters, renders results or error messages.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use serde_json::json;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{Args, Command, Config, DEFAULT_LOG_LEVEL, SettingsArgs};
use crate::numeral::{Numeral, integer_to_roman, parse_integer};
use crate::validation::{ConversionReport, Severity, convert_document, is_canonical_numeral, is_valid_roman};

/// Environment variable that overrides every configured log level
const LOG_ENV: &str = "RUST_LOG";

/// Parse arguments, set up logging and run the requested command
///
/// The logger is installed before any config file is read so that
/// config loading is logged; the level from the files applies afterwards.
pub fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let env_filter = std::env::var(LOG_ENV).ok();
    init_logging(env_filter.as_deref());
    if env_filter.is_none() {
        log::set_max_level(startup_level(&args.settings));
    }

    let config = Config::from_args(&args.settings)?;

    if env_filter.is_none() {
        match level_filter(&config.log_level) {
            Some(level) => log::set_max_level(level),
            None => log::warn!("Unknown log level '{}'", config.log_level),
        }
    }
    log::debug!("Effective log level {}", config.log_level);

    if let Some(path) = &config.project_config {
        log::info!("Using project config {}", path.display());
    }

    let ok = execute(
        &config,
        &args.command,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Install env_logger; without `RUST_LOG` the level is driven by `log::set_max_level`
fn init_logging(env_filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    match env_filter {
        Some(filter) => builder.parse_filters(filter),
        None => builder.filter_level(LevelFilter::Trace),
    };
    builder.init();
}

/// Level in force while config files are read
fn startup_level(settings: &SettingsArgs) -> LevelFilter {
    settings
        .log_level
        .as_deref()
        .and_then(level_filter)
        .or_else(|| level_filter(DEFAULT_LOG_LEVEL))
        .unwrap_or(LevelFilter::Warn)
}

fn level_filter(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}

/// Run one command, writing results to `out` and messages to `err`
///
/// Returns `false` when the input was rejected.
pub fn execute(
    config: &Config,
    command: &Command,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    log::debug!("Executing {:?}", command);

    match command {
        Command::ToInt { numeral } => to_int(config, numeral, out, err),
        Command::ToRoman { number } => to_roman(config, number, out, err),
        Command::Check { text } => check(config, text, out),
        Command::Convert { path } => {
            let content = read_input(path, io::stdin())?;
            convert(config, &content, out, err)
        }
    }
}

fn to_int(config: &Config, numeral: &str, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    match numeral.parse::<Numeral>() {
        Ok(numeral) => {
            if config.json {
                writeln!(out, "{}", serde_json::to_string(&numeral)?)?;
            } else {
                writeln!(out, "{}", numeral.value())?;
            }
            Ok(true)
        }
        Err(e) => report_error(config, &e, out, err),
    }
}

fn to_roman(config: &Config, number: &str, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let value = match parse_integer(number) {
        Ok(value) => value,
        Err(e) => return report_error(config, &e, out, err),
    };

    if value == 0 && !config.allow_zero {
        return report_error(config, &"Zero has no Roman numeral", out, err);
    }

    match integer_to_roman(value) {
        Ok(roman) => {
            if config.json {
                writeln!(out, "{}", json!({ "value": value, "roman": roman }))?;
            } else {
                writeln!(out, "{}", roman)?;
            }
            Ok(true)
        }
        Err(e) => report_error(config, &e, out, err),
    }
}

fn check(config: &Config, text: &str, out: &mut impl Write) -> Result<bool> {
    let valid = if config.strict_empty {
        is_canonical_numeral(text)
    } else {
        is_valid_roman(text)
    };

    if config.json {
        writeln!(out, "{}", json!({ "input": text, "valid": valid }))?;
    } else {
        writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    }

    Ok(valid)
}

fn convert(config: &Config, content: &str, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let report = convert_document(content, &config.options());
    log::info!(
        "Converted {} lines with {} errors",
        report.conversions.len(),
        report.error_count()
    );

    if config.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&report, out, err)?;
    }

    Ok(report.is_valid())
}

fn write_report(report: &ConversionReport, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for conversion in &report.conversions {
        writeln!(out, "{}\t{}\t{}", conversion.line, conversion.value, conversion.roman)?;
    }

    for diagnostic in &report.diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(err, "line {}: {}: {}", diagnostic.line, label, diagnostic.message)?;
    }

    Ok(())
}

fn report_error(
    config: &Config,
    message: &dyn std::fmt::Display,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    if config.json {
        writeln!(out, "{}", json!({ "error": message.to_string() }))?;
    } else {
        writeln!(err, "error: {}", message)?;
    }
    Ok(false)
}

/// Read a file, or `stdin` when the path is `-`
fn read_input(path: &Path, mut stdin: impl Read) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
