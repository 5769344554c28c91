//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `papi_core` linkage and show which time source this host resolves.
//! - Print one `key=value` line per fact.
//!
//! Usage: `papi_cli [samples] [log_dir]` (default 3 samples). `log_dir` may
//! also come from `PAPI_LOG_DIR`; without either, logging stays off.

use papi_core::{HostEnvironment, HostGlobals};

const DEFAULT_SAMPLES: usize = 3;
const LOG_DIR_ENV: &str = "PAPI_LOG_DIR";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    samples: usize,
    log_dir: Option<String>,
}

/// Parses positional arguments (program name already skipped).
///
/// An explicit `log_dir` argument wins over `env_log_dir`.
fn parse_args<I>(args: I, env_log_dir: Option<String>) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let samples = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|err| format!("invalid sample count `{raw}`: {err}"))?,
        None => DEFAULT_SAMPLES,
    };
    let log_dir = args
        .next()
        .or(env_log_dir)
        .filter(|dir| !dir.trim().is_empty());
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument `{extra}`"));
    }
    Ok(CliArgs { samples, log_dir })
}

fn main() {
    let args = match parse_args(std::env::args().skip(1), std::env::var(LOG_DIR_ENV).ok()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // Before the clock resolves, so selection events reach the log file.
    if let Some(dir) = args.log_dir.as_deref() {
        if let Err(err) = papi_core::init_logging(papi_core::default_log_level(), dir) {
            eprintln!("logging init failed: {err}");
            std::process::exit(2);
        }
    }

    println!("papi_core ping={}", papi_core::ping());
    println!("papi_core version={}", papi_core::core_version());
    println!(
        "environment={}",
        HostEnvironment::classify(&HostGlobals::probe())
    );

    let clock = papi_core::process_clock();
    println!("time_source={}", clock.source_kind());
    println!("time_origin={:.3}", clock.time_origin());
    for index in 0..args.samples {
        println!("now[{index}]={:.3}", clock.now());
    }
    if let Some((level, path)) = papi_core::logging_status() {
        println!("log_level={level}");
        println!("log_dir={}", path.display());
    }
}
