// src/cli.rs
use std::env;

use crate::config::ExportFormat;
use crate::core::UreqTransport;
use crate::error::CliError;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunOptions};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub run: RunOptions,
    pub help: bool,
}

/// Parse args, read the environment, run every step.
/// Only usage and configuration errors come back as `Err`; step failures are printed.
pub fn run() -> Result<(), CliError> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{HELP}");
        return Ok(());
    }

    let mut transport = UreqTransport::new();
    let mut progress = ConsoleProgress;
    runner::run_with_lookup(|name| env::var(name).ok(), &mut transport, &params.run, &mut progress)?;
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("Missing output path"))?;
                params.run.export.set_path(&v);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --format"))?;
                params.run.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| usage(format!("Unknown format: {v}")))?;
            }
            "--preview" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --preview"))?;
                params.run.export.preview_rows = v
                    .parse()
                    .map_err(|_| usage(format!("Invalid row count for --preview: {v}")))?;
            }
            "--skip-input" => params.run.skip_input = true,
            "--skip-log" => params.run.skip_log = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}
