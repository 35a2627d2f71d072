// src/progress.rs
/// Operator-facing progress for a run.
/// The console sink prints plain lines; tests collect them instead.
pub trait Progress {
    /// Start of a step, e.g. "Fetching actor run input".
    fn section(&mut self, _title: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something went wrong in the current step.
    fn error(&mut self, msg: &str) { self.log(msg); }
}

/// Prints everything to stdout, in order.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn section(&mut self, title: &str) {
        println!("\n--- {title} ---");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Keeps every line in memory.
#[derive(Default, Debug)]
pub struct CollectProgress {
    pub lines: Vec<String>,
}

impl CollectProgress {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Progress for CollectProgress {
    fn section(&mut self, title: &str) {
        self.lines.push(format!("--- {title} ---"));
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
}
