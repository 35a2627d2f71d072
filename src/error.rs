// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("One or more required environment variables are not set: {}", join_names(.names))]
    Missing { names: Vec<&'static str> },

    #[error("Invalid API base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
}

/// Errors that stop the process: bad command line or missing configuration.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure of a single fetch step. Never escapes the step that produced it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was received at all (DNS, connect, TLS, read).
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// Server answered with a non-2xx status.
    #[error("HTTP {status}{}", reason_suffix(.status))]
    Status { status: u16, body: Option<String> },

    /// Body was received but is not the expected JSON shape.
    #[error("malformed payload: {reason}")]
    Malformed { reason: String },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 and 403 point at the token rather than the request.
    pub fn is_auth(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

fn join_names(names: &[&'static str]) -> String {
    names.join(", ")
}

fn reason_suffix(status: &u16) -> String {
    ureq::http::StatusCode::from_u16(*status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(|r| format!(" {r}"))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed writing '{}': {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },
}
