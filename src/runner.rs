// src/runner.rs
//
// Top-level run: input, log, dataset, export, strictly in that order.
// Every step catches its own failure and turns it into console text;
// nothing a step does can stop the steps after it.

use std::path::PathBuf;

use crate::{
    config::{ExportOptions, RunConfig},
    core::Transport,
    error::{ConfigError, FetchError},
    export::export,
    fetch::{fetch_dataset, fetch_input, fetch_log},
    progress::Progress,
};

pub const INPUT_AUTH_HINT: &str =
    "Please check that your 'APIFY_TOKEN' is correct and has the necessary permissions.";
pub const LOG_AUTH_HINT: &str = "Please check that your 'APIFY_TOKEN' is correct.";
pub const DATASET_AUTH_HINT: &str =
    "Please check that your 'APIFY_TOKEN' is correct and that the dataset ID is valid.";

const BODY_EXCERPT_CHARS: usize = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped,
    /// Dataset parsed but held no records; export not attempted.
    Empty,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub skip_input: bool,
    pub skip_log: bool,
    pub export: ExportOptions,
}

/// What each step did. For tests and the closing debug line, not a stable contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub input: StepOutcome,
    pub log: StepOutcome,
    pub dataset: StepOutcome,
    pub export: StepOutcome,
    pub records: usize,
    pub written: Option<PathBuf>,
}

/// Load the run identity through `lookup`, then run. A configuration error
/// returns before `transport` is touched.
pub fn run_with_lookup<F>(
    lookup: F,
    transport: &mut dyn Transport,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = RunConfig::from_lookup(lookup)?;
    Ok(run(&cfg, transport, opts, progress))
}

pub fn run(
    cfg: &RunConfig,
    transport: &mut dyn Transport,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> RunSummary {
    logd!("run: {:?}", cfg);
    progress.log("Attempting to fetch data from the Apify actor run...");

    let input = if opts.skip_input {
        StepOutcome::Skipped
    } else {
        input_step(cfg, transport, progress)
    };

    let log = if opts.skip_log {
        StepOutcome::Skipped
    } else {
        log_step(cfg, transport, progress)
    };

    let (dataset, exported, records, written) = dataset_step(cfg, transport, &opts.export, progress);

    let summary = RunSummary { input, log, dataset, export: exported, records, written };
    logf!(
        "run finished: input={:?} log={:?} dataset={:?} export={:?} records={}",
        summary.input, summary.log, summary.dataset, summary.export, summary.records
    );
    summary
}

/* ---------------- Steps ---------------- */

fn input_step(cfg: &RunConfig, transport: &mut dyn Transport, progress: &mut dyn Progress) -> StepOutcome {
    progress.section("Fetching actor run input");
    match fetch_input(cfg, transport) {
        Ok(text) => {
            progress.log("Input fetched successfully:");
            progress.log(&text);
            StepOutcome::Done
        }
        Err(e) => {
            report_fetch_error(progress, "input", &e, INPUT_AUTH_HINT);
            StepOutcome::Failed
        }
    }
}

fn log_step(cfg: &RunConfig, transport: &mut dyn Transport, progress: &mut dyn Progress) -> StepOutcome {
    progress.section("Fetching actor run log");
    match fetch_log(cfg, transport) {
        Ok(text) => {
            progress.log("Log fetched successfully:");
            progress.log(&text);
            StepOutcome::Done
        }
        Err(e) => {
            report_fetch_error(progress, "log", &e, LOG_AUTH_HINT);
            StepOutcome::Failed
        }
    }
}

fn dataset_step(
    cfg: &RunConfig,
    transport: &mut dyn Transport,
    opts: &ExportOptions,
    progress: &mut dyn Progress,
) -> (StepOutcome, StepOutcome, usize, Option<PathBuf>) {
    progress.section("Fetching actor run dataset");

    let records = match fetch_dataset(cfg, transport) {
        Ok(records) => records,
        Err(FetchError::Malformed { reason }) => {
            logd!("dataset: malformed payload: {}", reason);
            progress.error(
                "Failed to decode JSON from the dataset response. The data format may be incorrect.",
            );
            return (StepOutcome::Failed, StepOutcome::Skipped, 0, None);
        }
        Err(e) => {
            report_fetch_error(progress, "dataset", &e, DATASET_AUTH_HINT);
            return (StepOutcome::Failed, StepOutcome::Skipped, 0, None);
        }
    };

    if records.is_empty() {
        progress.log("The dataset is empty. No property records were found.");
        return (StepOutcome::Empty, StepOutcome::Skipped, 0, None);
    }

    let count = records.len();
    progress.log(&format!("Dataset fetched successfully. Found {count} records."));

    match export(&records, opts, progress) {
        Ok(path) => {
            progress.log(&format!("\nAll scraped data saved to '{}'.", path.display()));
            (StepOutcome::Done, StepOutcome::Done, count, Some(path))
        }
        Err(e) => {
            loge!("export failed: {}", e);
            progress.error(&format!("Error saving dataset: {e}"));
            (StepOutcome::Done, StepOutcome::Failed, count, None)
        }
    }
}

/* ---------------- Diagnostics ---------------- */

fn report_fetch_error(progress: &mut dyn Progress, what: &str, e: &FetchError, auth_hint: &str) {
    logf!("fetching {} failed: {}", what, e);
    progress.error(&format!("Error fetching {what}: {e}"));

    if let FetchError::Status { body: Some(body), .. } = e {
        let snippet = excerpt(body.trim(), BODY_EXCERPT_CHARS);
        if !snippet.is_empty() {
            progress.error(&format!("Server response: {snippet}"));
        }
    }
    if e.is_auth() {
        progress.error(auth_hint);
    }
}

fn excerpt(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("abc", 5), "abc");
        assert_eq!(excerpt("ééééé", 2), "éé...");
        assert_eq!(excerpt("", 2), "");
    }
}
